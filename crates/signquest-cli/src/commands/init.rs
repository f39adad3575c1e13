//! The `signquest init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("signquest.toml").exists() {
        println!("signquest.toml already exists, skipping.");
    } else {
        std::fs::write("signquest.toml", SAMPLE_CONFIG)?;
        println!("Created signquest.toml");
    }

    println!("\nNext steps:");
    println!("  1. Set `identity` and the store URL in signquest.toml to track progress");
    println!("  2. Run: signquest catalog");
    println!("  3. Run: signquest play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# signquest configuration

# Email to sign in with. Leave unset to play as a guest.
# identity = "${SIGNQUEST_EMAIL}"

# Milliseconds a "correct!" / "wrong, try again!" message stays up.
feedback_ms = 3000

catalog = [
    "Goodbye.png",
    "Hello.png",
    "ILoveYou.png",
    "No.png",
    "Please.png",
    "Sorry.png",
    "ThankYou.png",
    "Yes.png",
    "YoureWelcome.png",
]

[store]
type = "offline"

# To sync with the web backend instead:
# [store]
# type = "http"
# base_url = "http://localhost:3000"
# timeout_secs = 10
"#;
