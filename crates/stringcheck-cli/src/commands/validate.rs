use std::path::PathBuf;
use stringcheck_domain::RecordMsg;
use stringcheck_report::{build_report_with, Notifier, ReportOptions, WebhookNotifier};
use stringcheck_services::{
    collect_records, report_and_publish, FsResourceStore, RunOptions, XmlStringsParser,
};

pub struct ValidateArgs {
    pub root: Option<PathBuf>,
    pub webhook: Option<String>,
    pub report_to_remote: Option<String>,
    pub payload: Option<String>,
    pub format: String,
    pub strict: bool,
}

impl std::fmt::Debug for ValidateArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateArgs")
            .field("root", &self.root)
            .field("webhook", &self.webhook.as_ref().map(|_| "<redacted>"))
            .field("report_to_remote", &self.report_to_remote)
            .field("payload", &self.payload)
            .field("format", &self.format)
            .field("strict", &self.strict)
            .finish()
    }
}

pub fn run_validate(args: ValidateArgs) -> color_eyre::Result<()> {
    tracing::debug!(event = "validate_args", args = ?args);

    let cfg = stringcheck_config::load_config().unwrap_or_default();
    let report_cfg = cfg.report.clone().unwrap_or_default();
    let root = super::resolve_root(args.root, &cfg)?;

    let remote = stringcheck_config::parse_flag(
        args.report_to_remote
            .as_deref()
            .or(report_cfg.report_to_remote.as_deref()),
    )?;
    // checked before any work so a misconfigured CI job fails fast
    let notifier = if remote {
        let url = args.webhook.or(report_cfg.webhook).ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "remote reporting is enabled but no webhook is configured (--webhook or STRINGCHECK_WEBHOOK)"
            )
        })?;
        Some(WebhookNotifier::new(url))
    } else {
        None
    };

    let options = RunOptions {
        payload: args.payload.or(report_cfg.payload),
        report: ReportOptions {
            dedupe_syntax_tokens: report_cfg.dedupe_syntax_tokens.unwrap_or(true),
        },
    };

    let store = FsResourceStore::new(&root);
    let records = collect_records(&store, &XmlStringsParser)?;
    let issues = records.len();
    let notifier_ref = notifier.as_ref().map(|n| n as &dyn Notifier);

    if args.format == "json" {
        let items: Vec<RecordMsg> = records.iter().map(RecordMsg::from).collect();
        serde_json::to_writer(std::io::stdout().lock(), &items)?;
        println!();
        if let Some(n) = notifier_ref.filter(|_| issues > 0) {
            let report = build_report_with(&records, options.payload.as_deref(), &options.report);
            n.send(&report)?;
            crate::ui_ok!("report sent to webhook");
        }
    } else {
        let outcome =
            report_and_publish(records, &options, notifier_ref, &mut std::io::stdout().lock())?;
        if outcome.sent {
            crate::ui_ok!("report sent to webhook");
        }
    }

    if issues > 0 {
        crate::ui_warn!("{} placeholder issue(s) found under {}", issues, root.display());
        if args.strict {
            color_eyre::eyre::bail!("validation found {issues} issue(s)");
        }
    }
    Ok(())
}
