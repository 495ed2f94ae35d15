//! Binary entrypoint: replays a scripted input trace through a router
//! wired to logging collaborators, so the dispatch layer can be observed
//! end to end without a browser.

use std::{path::PathBuf, process, sync::Arc, time::Instant};

use clap::Parser;
use domtree::{Selector, Tree};
use skimmer_protocol::{Point, TouchEvent};
use skimmer_router::Router;
use tokio::time::{Duration, sleep};
use tracing::{error, warn};
use webkey::{Key, KeyPress};

use crate::collab::Announcer;

mod collab;
mod page;
mod script;

#[derive(Parser, Debug)]
#[command(name = "skimmer-replay", about = "Replay an input trace through the dispatch layer", version)]
/// Command-line interface for the `skimmer-replay` binary.
struct Cli {
    /// Path to a RON trace file; runs the built-in demo trace when omitted
    trace: Option<PathBuf>,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log.spec());

    let steps = match &cli.trace {
        Some(path) => match script::load(path) {
            Ok(steps) => steps,
            Err(e) => {
                error!("{}", e);
                process::exit(2);
            }
        },
        None => script::demo(),
    };

    let mut tree = page::sample_page();
    let announcer = Arc::new(Announcer);
    let mut router = match Router::new(
        &tree,
        announcer.clone(),
        announcer.clone(),
        announcer,
    ) {
        Ok(router) => router,
        Err(e) => {
            error!("router construction failed: {}", e);
            process::exit(2);
        }
    };

    for step in steps {
        replay_step(&mut router, &mut tree, &step).await;
    }
}

/// Applies one scripted step to the router.
async fn replay_step(router: &mut Router, tree: &mut Tree, step: &script::Step) {
    let now = Instant::now();
    match step {
        script::Step::Key(spec) => match Key::from_spec(spec) {
            Some(key) => router.handle_key(tree, &KeyPress::new(key), now),
            None => warn!(%spec, "unknown key spec, skipped"),
        },
        script::Step::Click(spec) => match query(tree, spec) {
            Some(target) => router.handle_click(tree, target),
            None => warn!(%spec, "no element for click, skipped"),
        },
        script::Step::TouchStart(x, y) => {
            router.handle_touch(&TouchEvent::Start(vec![Point::new(*x, *y)]), now);
        }
        script::Step::TouchMove(x, y) => {
            router.handle_touch(&TouchEvent::Move(Point::new(*x, *y)), now);
        }
        script::Step::TouchEnd => router.handle_touch(&TouchEvent::End, now),
        script::Step::TouchCancel => router.handle_touch(&TouchEvent::Cancel, now),
        script::Step::Focus(spec) => match query(tree, spec) {
            Some(node) => tree.set_focus(Some(node)),
            None => warn!(%spec, "no element for focus, skipped"),
        },
        script::Step::Blur => tree.set_focus(None),
        script::Step::Wait(ms) => sleep(Duration::from_millis(*ms)).await,
    }
}

/// Resolves a selector spec against the page, logging bad specs.
fn query(tree: &Tree, spec: &str) -> Option<domtree::NodeId> {
    match Selector::parse(spec) {
        Ok(sel) => tree.query(&sel),
        Err(e) => {
            warn!("bad selector in trace: {}", e);
            None
        }
    }
}
