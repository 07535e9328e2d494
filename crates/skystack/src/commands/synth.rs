use colored::Colorize;
use skystack_core::{build_stack, RemoteBackend, StackConfig};
use skystack_synth::Synthesizer;
use std::path::Path;

pub fn handle(
    config: &StackConfig,
    backend: &RemoteBackend,
    out_dir: &Path,
) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("スタック '{}' を合成中...", config.project_id)
            .blue()
            .bold()
    );

    backend.validate()?;
    let stack = build_stack(config)?;
    super::warn_if_anonymous(&stack);

    let synthesizer = Synthesizer::new(out_dir);
    let path = synthesizer.synth(&stack, backend)?;

    println!(
        "  {} プランを書き出しました: {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!(
        "  バックエンド: {} / {} (workspace: {})",
        backend.hostname, backend.organization, backend.workspace
    );
    println!();
    println!("{}", "適用は外部のプロビジョニングエンジンで行います。".dimmed());

    Ok(())
}
