//! List command

use anyhow::Result;
use console::style;
use devassist_assistants::{AssistantKind, GROUP_FULLNAME, GROUP_NAME};

use crate::output;

pub fn run() -> Result<()> {
    output::header("Available assistants");

    println!("{} ({})", style(GROUP_FULLNAME).bold(), GROUP_NAME);
    for kind in AssistantKind::all() {
        let assistant = kind.assistant();
        println!(
            "  {:<8} {}",
            style(assistant.name()).cyan(),
            assistant.usage()
        );
    }

    println!();
    output::info(&format!(
        "Run an assistant with: devassist {} <assistant> --name <name>",
        GROUP_NAME
    ));
    Ok(())
}
