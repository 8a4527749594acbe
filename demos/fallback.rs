use optional_value::{first_with_value, NoValueError, Optional, UntypedEmpty};

fn lookup(name: &str) -> Optional<u16> {
    match std::env::var(name) {
        Ok(s) => Optional::from_option(s.parse().ok()),
        Err(_) => UntypedEmpty.typed(),
    }
}

fn main() -> Result<(), NoValueError> {
    #[cfg(feature = "logger")]
    env_logger::init();

    let port = first_with_value!(
        lookup("DEMO_PORT"),
        lookup("PORT"),
        Optional::create(8080),
    );
    println!("port = {}", port.into_value()?);

    let timeout = lookup("DEMO_TIMEOUT").or_default(30);
    println!("timeout = {timeout}");

    match lookup("DEMO_UNSET").value() {
        Ok(x) => println!("DEMO_UNSET = {x}"),
        Err(e) => println!("DEMO_UNSET: {e}"),
    }

    Ok(())
}
