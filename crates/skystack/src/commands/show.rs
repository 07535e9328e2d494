use skystack_core::{build_stack, RemoteBackend, StackConfig};
use skystack_synth::Synthesizer;

/// stdoutにはJSONのみを出力する（パイプ前提）。警告はstderrへ。
pub fn handle(config: &StackConfig, backend: &RemoteBackend) -> anyhow::Result<()> {
    backend.validate()?;
    let stack = build_stack(config)?;
    super::warn_if_anonymous(&stack);

    print!("{}", Synthesizer::synth_to_string(&stack, backend)?);
    Ok(())
}
