//! Scribe Binary Entry Point
//!
//! Line-oriented driver for a workspace session: commands on stdin,
//! results on stdout, notices on stderr.

use std::path::Path;

use scribe_core::{DocumentId, DocumentKind, ScribeConfig};
use scribe_session::assistant::{ChatMessage, ProviderKind};
use scribe_session::config::load_config;
use scribe_session::notifications::NoticeLevel;
use scribe_session::Workbench;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

const HELP: &str = "commands: list | new <note|canvas> <name> | open <id> | rm <id> | \
rename <id> <name> | show | preview | write <text> | provider <openai|gemini|mistral> | \
key <key> | ask <prompt> | insert | quit";

#[tokio::main]
async fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ScribeConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let (workbench, mut notices) = Workbench::new(config);
    let printer = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            let tag = match notice.level {
                NoticeLevel::Success => "ok",
                NoticeLevel::Info => "info",
                NoticeLevel::Error => "error",
            };
            eprintln!("[{}] {}", tag, notice.message);
        }
    });

    log::info!("scribe session started");
    println!("{}", HELP);

    run(&workbench, BufReader::new(tokio::io::stdin())).await;

    // the channel closes once the last state handle is gone
    drop(workbench);
    if let Err(e) = printer.await {
        log::error!("notice printer failed: {}", e);
    }
    log::info!("scribe session closed");
}

/// Execute commands from `input` until EOF or `quit`, then wait for every
/// outstanding `ask` to finish.
async fn run<R>(workbench: &Workbench, input: R)
where
    R: AsyncBufRead + Unpin,
{
    let mut requests = JoinSet::new();
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("failed to read stdin: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "list" => {
                let filter = (!rest.is_empty()).then_some(rest);
                let rows = workbench.list_documents(filter).await;
                match serde_json::to_string_pretty(&rows) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("failed to serialize document list: {}", e),
                }
            }
            "new" => {
                let (kind, name) = rest.split_once(' ').unwrap_or((rest, ""));
                match kind.parse::<DocumentKind>() {
                    Ok(kind) => {
                        let doc = workbench.create_file(name.trim(), kind).await;
                        println!("{}", doc.id);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "open" => {
                let id = DocumentId::from(rest);
                if !workbench.select_file(Some(&id)).await {
                    println!("no change");
                }
            }
            "rm" => {
                if workbench.delete_file(&DocumentId::from(rest)).await.is_none() {
                    println!("not found: {}", rest);
                }
            }
            "rename" => {
                let (id, name) = rest.split_once(' ').unwrap_or((rest, ""));
                if !workbench.rename_file(&DocumentId::from(id), name.trim()).await {
                    println!("not found: {}", id);
                }
            }
            "show" => match workbench.active_file().await {
                Some(doc) if doc.is_note() => println!("{}\n\n{}", doc.name, doc.content),
                Some(doc) => println!("{} (canvas, {} bytes)", doc.name, doc.content.len()),
                None => println!("no document selected"),
            },
            "preview" => {
                if let Ok(html) = workbench.preview_note().await {
                    println!("{}", html.unwrap_or_default());
                }
            }
            "write" => {
                if let Err(e) = workbench.edit_note(&rest.replace("\\n", "\n")).await {
                    log::debug!("write rejected: {}", e);
                }
            }
            "provider" => match rest.parse::<ProviderKind>() {
                Ok(kind) => workbench.set_provider(kind).await,
                Err(e) => println!("{}", e),
            },
            "key" => workbench.set_api_key(rest).await,
            "ask" => {
                let workbench = workbench.clone();
                let prompt = rest.to_string();
                requests.spawn(async move {
                    if let Ok(reply) = workbench.send_prompt(&prompt).await {
                        println!("{}", reply.content);
                    }
                });
            }
            "insert" => {
                let last = workbench
                    .transcript()
                    .await
                    .iter()
                    .rposition(ChatMessage::is_insertable);
                match last {
                    Some(index) => {
                        if let Err(e) = workbench.insert_into_note(index).await {
                            log::debug!("insert rejected: {}", e);
                        }
                    }
                    None => println!("nothing to insert"),
                }
            }
            other => println!("unknown command '{}'; {}", other, HELP),
        }
    }

    if !requests.is_empty() {
        log::info!("waiting for {} assistant request(s)", requests.len());
    }
    while let Some(joined) = requests.join_next().await {
        if let Err(e) = joined {
            log::error!("assistant request task failed: {}", e);
        }
    }
}
