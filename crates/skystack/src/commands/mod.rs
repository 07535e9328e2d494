pub mod show;
pub mod synth;
pub mod validate;

use colored::Colorize;
use skystack_core::builder::{MEMBER_ALL_USERS, ROLE_RUN_INVOKER};
use skystack_core::Stack;

/// 匿名アクセスを許可するポリシーが含まれる場合に警告を表示
///
/// デモ用スタックでは意図した設定だが、黙って通さない。
pub(crate) fn warn_if_anonymous(stack: &Stack) {
    if stack.grants(ROLE_RUN_INVOKER, MEMBER_ALL_USERS) {
        eprintln!(
            "{}",
            "⚠ このスタックはサービスへの匿名アクセス (allUsers) を許可しています"
                .yellow()
        );
    }
}
