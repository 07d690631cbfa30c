use tomatin_core::TimerSession;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let session = TimerSession::open()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&session.state().statistics)?
    );
    Ok(())
}
