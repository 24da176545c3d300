//! 文本工具

use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// 默认截断长度
pub const DEFAULT_TRUNCATE_LEN: usize = 14;

/// 超过 `max_len` 个字符时截断并追加 `...`
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len).collect();
    truncated.push_str("...");
    truncated
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

/// 各平台的剪贴板命令
fn clipboard_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("pbcopy", NO_ARGS)
    } else if cfg!(target_os = "windows") {
        ("clip", NO_ARGS)
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        ("wl-copy", NO_ARGS)
    } else {
        ("xclip", XCLIP_ARGS)
    }
}

async fn write_clipboard(text: &str) -> std::io::Result<()> {
    let (program, args) = clipboard_command();
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }
    child.wait().await?;
    Ok(())
}

/// 写入系统剪贴板，不等待结果，失败只记调试日志
///
/// 需在 tokio 运行时内调用。
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_string();
    tokio::spawn(async move {
        if let Err(e) = write_clipboard(&text).await {
            log::debug!("写入剪贴板失败: {}", e);
        }
    });
}
