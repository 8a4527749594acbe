use insta::assert_snapshot;
use optional_value::{
    empty, first_with_value, NoValueError, Optional, UntypedEmpty,
};

#[test]
fn error_message() {
    let err = Optional::<u32>::EMPTY.into_value().unwrap_err();
    assert_snapshot!(err, @"no value was set for this optional");
    assert_snapshot!(format!("{err:?}"), @"NoValueError");
}

#[test]
fn debug_rendering() {
    assert_snapshot!(format!("{:?}", Optional::create(5)), @"Present(5)");
    assert_snapshot!(format!("{:?}", Optional::<u8>::EMPTY), @"Absent");
    assert_snapshot!(
        format!("{:?}", Optional::create(Some("x"))),
        @r#"Present(Some("x"))"#
    );
    assert_snapshot!(format!("{UntypedEmpty:?}"), @"UntypedEmpty");
}

#[test]
fn fallback_chain() {
    let from_flag: Optional<u16> = empty();
    let from_env: Optional<u16> = UntypedEmpty.typed();
    let from_file = Optional::create(8080);
    let builtin = Optional::create(80);

    let port = first_with_value!(from_flag, from_env, from_file, builtin);
    assert_snapshot!(format!("{port:?}"), @"Present(8080)");

    let port = first_with_value([from_flag, from_env]).or(builtin);
    assert_eq!(port.into_value(), Ok(80));
    assert_eq!(from_flag.or_default(1), 1);
}

#[test]
fn error_is_a_std_error() {
    fn read(x: Optional<&str>) -> Result<usize, Box<dyn std::error::Error>> {
        Ok(x.into_value()?.len())
    }

    assert_eq!(read(Optional::create("four")).ok(), Some(4));
    let err = read(UntypedEmpty.typed()).unwrap_err();
    assert!(err.downcast_ref::<NoValueError>().is_some());
}
