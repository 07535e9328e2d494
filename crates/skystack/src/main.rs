mod commands;

use clap::{Args, Parser, Subcommand};
use skystack_core::{RemoteBackend, StackConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sky")]
#[command(about = "宣言して、手放す。インフラは、一枚のプランになった。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// スタック設定（コンパイル時デフォルト＋フラグ/環境変数で上書き）
#[derive(Args)]
struct ConfigArgs {
    /// GCPプロジェクトID
    #[arg(long, env = "SKYSTACK_PROJECT", default_value = "skystack-demo")]
    project: String,

    /// リージョン
    #[arg(long, env = "SKYSTACK_REGION", default_value = "asia-northeast1")]
    region: String,

    /// Artifact RegistryのリポジトリID
    #[arg(long, env = "SKYSTACK_REPOSITORY", default_value = "skystack-demo")]
    repository: String,

    /// ビルドトリガーが監視するGitHubオーナー
    #[arg(long, env = "SKYSTACK_VCS_OWNER", default_value = "chronista-club")]
    vcs_owner: String,

    /// ビルドトリガーが監視するGitHubリポジトリ
    #[arg(long, env = "SKYSTACK_VCS_REPO", default_value = "skystack-demo")]
    vcs_repo: String,

    /// トリガー対象のブランチ
    #[arg(long, env = "SKYSTACK_BRANCH", default_value = "main")]
    branch: String,
}

impl ConfigArgs {
    fn to_config(&self) -> StackConfig {
        StackConfig {
            project_id: self.project.clone(),
            region: self.region.clone(),
            repository_id: self.repository.clone(),
            vcs_owner: self.vcs_owner.clone(),
            vcs_repo: self.vcs_repo.clone(),
            branch: self.branch.clone(),
        }
    }
}

/// リモート実行バックエンドの接続先
#[derive(Args)]
struct BackendArgs {
    /// バックエンドのホスト名
    #[arg(long, env = "SKYSTACK_BACKEND_HOST", default_value = "app.terraform.io")]
    backend_host: String,

    /// バックエンド上の組織名
    #[arg(long, env = "SKYSTACK_BACKEND_ORG", default_value = "chronista-club")]
    backend_org: String,

    /// ステートを保持するワークスペース名
    #[arg(long, env = "SKYSTACK_WORKSPACE", default_value = "skystack-demo")]
    workspace: String,
}

impl BackendArgs {
    fn to_backend(&self) -> RemoteBackend {
        RemoteBackend {
            hostname: self.backend_host.clone(),
            organization: self.backend_org.clone(),
            workspace: self.workspace.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// 宣言ツリーを構築してプランドキュメントを書き出す
    Synth {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        backend: BackendArgs,

        /// プランドキュメントの出力先ディレクトリ
        #[arg(
            short,
            long,
            env = "SKYSTACK_OUT_DIR",
            default_value = ".skystack"
        )]
        out_dir: PathBuf,
    },
    /// 設定を検証（ツリーは構築するが書き出さない）
    Validate {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        backend: BackendArgs,
    },
    /// プランドキュメントを標準出力に表示
    Show {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        backend: BackendArgs,
    },
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrに出力（showのstdoutはJSON専用）
    tracing_subscriber::fmt::init();

    match cli.command {
        Commands::Synth {
            config,
            backend,
            out_dir,
        } => commands::synth::handle(&config.to_config(), &backend.to_backend(), &out_dir),
        Commands::Validate { config, backend } => {
            commands::validate::handle(&config.to_config(), &backend.to_backend())
        }
        Commands::Show { config, backend } => {
            commands::show::handle(&config.to_config(), &backend.to_backend())
        }
        Commands::Version => {
            println!("skystack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
