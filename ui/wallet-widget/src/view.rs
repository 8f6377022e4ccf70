//! Markup for the widget. Pure string building, so every state can be
//! checked without a browser.
//!
//! Interactive elements carry `data-action`; the root listeners in
//! [`crate::events`] dispatch on it.

use aw_wallet_core::{DetailsView, PickerView, ShellView};

use crate::dom::escape_html;
use crate::modal::ModalKind;
use crate::theme::{Classes, Skin};

pub const TITLE: &str = "ASI Wallet Integration";

pub struct Frame<'a> {
    pub shell: &'a ShellView,
    pub skin: Skin,
    pub setup_url: &'a str,
    pub modal: Option<(ModalKind, PickerView)>,
}

pub fn render(frame: &Frame<'_>) -> String {
    let c = frame.skin.classes();
    let modal = frame
        .modal
        .as_ref()
        .map(|(kind, view)| render_modal(*kind, view, c))
        .unwrap_or_default();
    format!(
        r#"<div class="{root}">{header}{body}{modal}</div>"#,
        root = c.root,
        header = render_header(frame.skin),
        body = render_shell(frame.shell, frame.setup_url, c),
    )
}

fn render_header(skin: Skin) -> String {
    let c = skin.classes();
    let options: String = Skin::ALL
        .iter()
        .map(|s| {
            let selected = if *s == skin { " selected" } else { "" };
            format!(r#"<option value="{0}"{selected}>{0}</option>"#, s.name())
        })
        .collect();
    format!(
        r#"<nav class="{header}"><span class="{title}">{TITLE}</span><select class="{select}" data-action="skin" aria-label="Skin">{options}</select></nav>"#,
        header = c.header,
        title = c.title,
        select = c.select,
    )
}

fn render_shell(shell: &ShellView, setup_url: &str, c: &Classes) -> String {
    match shell {
        ShellView::Initialising { wallet_found } => {
            let missing = if *wallet_found {
                String::new()
            } else {
                format!(
                    r#"<div class="{notice}"><h2>Wallet not found</h2><p>Please install or connect your wallet to continue.</p><ul><li>Download the wallet extension from the official source.</li><li>Ensure that your wallet is unlocked and connected. <a class="{link}" href="{url}" target="_blank" rel="noopener">Setup Instructions</a></li></ul></div>"#,
                    notice = c.notice,
                    link = c.link,
                    url = escape_html(setup_url),
                )
            };
            format!("<h1>Wallet Initialising...</h1>{missing}")
        }
        ShellView::Locked => format!(
            r#"<div class="{notice}"><div class="{title}">Wallet Locked</div><button class="{button}" data-action="unlock">Unlock</button></div>"#,
            notice = c.notice,
            title = c.title,
            button = c.button,
        ),
        ShellView::Empty => "<h1>Wallet Empty. Please create an account in the wallet</h1>".to_owned(),
        ShellView::Unlocked { details } => {
            let panel = details.as_ref().map(|d| render_details(d, c)).unwrap_or_default();
            format!(
                r#"<div class="{actions}"><button class="{button}" data-action="open-account">Change Account</button><button class="{button}" data-action="open-network">Change Network</button><button class="{button}" data-action="sign-out">Sign Out</button></div>{panel}"#,
                actions = c.actions,
                button = c.button,
            )
        }
    }
}

fn render_details(details: &DetailsView, c: &Classes) -> String {
    let row = |label: &str, value: &str| {
        format!(
            r#"<div><span class="{}">{label}</span><span>{}</span></div>"#,
            c.row_label,
            escape_html(value)
        )
    };
    format!(
        r#"<div class="{}">{}{}{}</div>"#,
        c.details,
        row("Network:", &details.network),
        row("Account:", &details.account),
        row("Usable Balance:", &details.balance),
    )
}

fn render_modal(kind: ModalKind, view: &PickerView, c: &Classes) -> String {
    let body = match view {
        PickerView::Loading => {
            let text = kind
                .loading_text()
                .map(|t| format!(r#"<p class="{}">{t}</p>"#, c.muted))
                .unwrap_or_default();
            format!(r#"<div class="{}"></div>{text}"#, c.spinner)
        }
        PickerView::Empty => format!(r#"<p class="{}">{}</p>"#, c.muted, kind.empty_text()),
        PickerView::Single => format!(r#"<p class="{}">{}</p>"#, c.muted, kind.single_text()),
        PickerView::Choices {
            options,
            selected,
            can_submit,
        } => {
            let mut items = format!(r#"<option value="">{}</option>"#, kind.placeholder());
            for option in options {
                let mark = if selected.as_deref() == Some(option.value.as_str()) {
                    " selected"
                } else {
                    ""
                };
                items.push_str(&format!(
                    r#"<option value="{}"{mark}>{}</option>"#,
                    escape_html(&option.value),
                    escape_html(&option.label)
                ));
            }
            let disabled = if *can_submit { "" } else { " disabled" };
            format!(
                r#"<p>{prompt}</p><select class="{select}" data-action="pick" aria-label="{placeholder}">{items}</select><button class="{button}" data-action="submit-modal"{disabled}>{label}</button>"#,
                prompt = kind.prompt(),
                select = c.select,
                placeholder = kind.placeholder(),
                button = c.button_primary,
                label = kind.submit_label(),
            )
        }
    };
    format!(
        r#"<div class="{overlay}"><div class="{dialog}" role="dialog"><div class="{head}"><h2>{title}</h2><button class="{close}" data-action="close-modal" aria-label="Close">&times;</button></div>{body}</div></div>"#,
        overlay = c.overlay,
        dialog = c.dialog,
        head = c.dialog_head,
        title = kind.title(),
        close = c.close,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_wallet_core::PickerOption;

    fn frame(shell: &ShellView) -> Frame<'_> {
        Frame {
            shell,
            skin: Skin::Classic,
            setup_url: "https://setup.example/start",
            modal: None,
        }
    }

    #[test]
    fn missing_wallet_shows_setup_link() {
        let html = render(&frame(&ShellView::Initialising { wallet_found: false }));
        assert!(html.contains("Wallet Initialising..."));
        assert!(html.contains("Wallet not found"));
        assert!(html.contains(r#"href="https://setup.example/start""#));

        let html = render(&frame(&ShellView::Initialising { wallet_found: true }));
        assert!(!html.contains("Wallet not found"));
    }

    #[test]
    fn locked_offers_unlock_only() {
        let html = render(&frame(&ShellView::Locked));
        assert!(html.contains("Wallet Locked"));
        assert!(html.contains(r#"data-action="unlock""#));
        assert!(!html.contains("sign-out"));
    }

    #[test]
    fn unlocked_renders_controls_and_escaped_details() {
        let shell = ShellView::Unlocked {
            details: Some(DetailsView {
                network: "net-1".into(),
                account: "<cosmos1abc>".into(),
                balance: "2.500000 ATOM".into(),
            }),
        };
        let html = render(&frame(&shell));
        for action in ["open-account", "open-network", "sign-out"] {
            assert!(html.contains(&format!(r#"data-action="{action}""#)));
        }
        assert!(html.contains("Usable Balance:"));
        assert!(html.contains("&lt;cosmos1abc&gt;"));

        let loading = render(&frame(&ShellView::Unlocked { details: None }));
        assert!(loading.contains("Change Account"));
        assert!(!loading.contains("Usable Balance:"));
    }

    #[test]
    fn choices_render_placeholder_and_disabled_submit() {
        let shell = ShellView::Unlocked { details: None };
        let mut f = frame(&shell);
        f.modal = Some((
            ModalKind::Network,
            PickerView::Choices {
                options: vec![PickerOption {
                    value: "net-2".into(),
                    label: "Net Two".into(),
                }],
                selected: None,
                can_submit: false,
            },
        ));
        let html = render(&f);
        assert!(html.contains("Network Switch"));
        assert!(html.contains(r#"<option value="">Select Network</option>"#));
        assert!(html.contains(r#"<option value="net-2">Net Two</option>"#));
        assert!(html.contains(r#"data-action="submit-modal" disabled>Submit"#));
    }

    #[test]
    fn picker_states_use_dialog_texts() {
        let shell = ShellView::Unlocked { details: None };
        let mut f = frame(&shell);
        f.modal = Some((ModalKind::Account, PickerView::Single));
        assert!(render(&f).contains("You only have one account. No need to switch."));

        f.modal = Some((ModalKind::Network, PickerView::Loading));
        assert!(render(&f).contains("Loading networks..."));
    }

    #[test]
    fn tailwind_skin_swaps_classes() {
        let shell = ShellView::Empty;
        let mut f = frame(&shell);
        f.skin = Skin::Tailwind;
        let html = render(&f);
        assert!(html.contains("bg-gray-100"));
        assert!(html.contains(r#"<option value="tailwind" selected>"#));
    }
}
