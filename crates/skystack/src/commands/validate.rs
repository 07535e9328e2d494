use colored::Colorize;
use skystack_core::{build_stack, RemoteBackend, StackConfig};

pub fn handle(config: &StackConfig, backend: &RemoteBackend) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("スタック '{}' を検証中...", config.project_id)
            .blue()
            .bold()
    );

    backend.validate()?;
    let stack = build_stack(config)?;
    super::warn_if_anonymous(&stack);

    println!(
        "  {} 宣言ツリーを構築しました ({} 宣言):",
        "✓".green(),
        stack.declarations.len()
    );
    for declaration in &stack.declarations {
        println!(
            "    {} {} ({})",
            "▶".green(),
            declaration.id.cyan(),
            declaration.resource_type()
        );
    }

    Ok(())
}
