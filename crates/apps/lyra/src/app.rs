//! Scripted demo session against the state store

use std::sync::Arc;

use anyhow::Context;
use log::info;
use mail::{
    ActionDispatcher, ContentType, DemoMailData, LayoutSpec, MailboxType, NavigationType,
    Notifier, StateStore, UiState, button_set,
};

/// Simulated window width in dp, read from `LYRA_WIDTH` (default 1200)
pub fn window_width_from_env() -> f32 {
    std::env::var("LYRA_WIDTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1200.0)
}

/// Toast sink that writes to stdout
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, text: &str) {
        println!("  [toast] {text}");
    }
}

pub fn run(width: f32) -> anyhow::Result<()> {
    let layout = LayoutSpec::for_width(width);
    info!(
        "window width {width}dp -> {:?} navigation, {:?} content",
        layout.navigation, layout.content
    );

    let data = DemoMailData::new();
    let store = StateStore::new(&data);

    // Render every published snapshot the way a front end would.
    let subscription = store.subscribe(move |state| render(state, layout));

    // Browse each mailbox once; selections are remembered per mailbox.
    for mailbox in MailboxType::ALL {
        store.select_mailbox(mailbox);
    }
    store.select_mailbox(MailboxType::Inbox);

    // Open the newest inbox email and fire its simulated actions.
    if layout.content == ContentType::ListAndDetail {
        store
            .select_email(MailboxType::Inbox, Some(0))
            .context("selecting first inbox email")?;
    } else {
        store
            .open_email(MailboxType::Inbox, 0)
            .context("opening first inbox email")?;
    }

    let dispatcher = ActionDispatcher::new(Arc::new(StdoutNotifier));
    for button in button_set(store.snapshot().current_mailbox) {
        dispatcher.press(button.action);
    }

    if layout.content == ContentType::ListOnly {
        store.close_detail();
    }

    store.unsubscribe(subscription);

    if std::env::var_os("LYRA_DUMP_STATE").is_some() {
        let state = store.snapshot();
        println!("{}", serde_json::to_string_pretty(&*state)?);
    }

    Ok(())
}

/// Print one snapshot: navigation tabs, then list and/or detail
fn render(state: &Arc<UiState>, layout: LayoutSpec) {
    println!();
    render_navigation(state, layout.navigation);

    let show_list =
        layout.content == ContentType::ListAndDetail || !state.showing_detail;
    if show_list {
        render_list(state);
    }
    if layout.content == ContentType::ListAndDetail || state.showing_detail {
        render_detail(state);
    }
}

fn render_navigation(state: &Arc<UiState>, navigation: NavigationType) {
    let tabs: Vec<String> = MailboxType::ALL
        .iter()
        .map(|m| {
            if *m == state.current_mailbox {
                format!("[{}]", m.display_name())
            } else {
                m.display_name().to_string()
            }
        })
        .collect();
    let chrome = match navigation {
        NavigationType::BottomNavigation => "bottom bar",
        NavigationType::NavigationRail => "rail",
        NavigationType::PermanentDrawer => "drawer",
    };
    println!("({chrome}) {}", tabs.join("  "));
}

fn render_list(state: &Arc<UiState>) {
    let mailbox = state.current_mailbox;
    let emails = state.current_emails();
    if emails.is_empty() {
        println!("  (no emails in {})", mailbox.display_name());
        return;
    }
    for (i, email) in emails.iter().enumerate() {
        let marker = if state.selected_index(mailbox) == Some(i) {
            ">"
        } else {
            " "
        };
        println!(
            " {marker} {} — {} ({})",
            email.sender.full_name(),
            email.subject,
            email.created_at
        );
    }
}

fn render_detail(state: &Arc<UiState>) {
    let Some(email) = state.selected_email() else {
        println!("  | nothing selected");
        return;
    };
    println!("  | From: {} <{}>", email.sender.full_name(), email.sender.email);
    println!("  | Subject: {}", email.subject);
    println!("  | {}", email.body);
    let buttons: Vec<&str> = button_set(state.current_mailbox)
        .iter()
        .map(|b| b.action.label())
        .collect();
    println!("  | actions: {}", buttons.join(" / "));
}
