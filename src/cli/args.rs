//! Top-level argument handling.
//!
//! Splits the raw argument vector into output mode, command name and the
//! command's own argument slice. This runs once per process, before any
//! handler sees its arguments.

use log::debug;

/// Global output-mode flag
pub const JSON_FLAG: &str = "--json";

/// Per-run context handed to every command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Every outcome is a single JSON line on stdout
    pub json_mode: bool,

    /// Command name as typed (aliases unresolved)
    pub command: String,

    /// Tokens after the command name, with global flags removed
    pub command_args: Vec<String>,
}

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Run(InvocationContext),
}

/// Classify the raw argument vector (program name excluded)
///
/// `--json` before the command name is always global. After the command
/// name it is global too, except for `diff`, where it keeps its legacy
/// meaning of printing the raw diff as JSON.
pub fn parse_invocation(args: &[String]) -> Invocation {
    let leading = args.iter().take_while(|a| *a == JSON_FLAG).count();
    let Some(first) = args.get(leading) else {
        return Invocation::Help;
    };

    match first.as_str() {
        "--help" | "-h" => return Invocation::Help,
        "--version" | "-v" => return Invocation::Version,
        _ => {}
    }

    let rest = &args[leading + 1..];
    let keeps_local_json = first == "diff";
    let trailing_json = !keeps_local_json && rest.iter().any(|a| a == JSON_FLAG);

    let command_args = rest
        .iter()
        .filter(|a| keeps_local_json || *a != JSON_FLAG)
        .cloned()
        .collect();

    let ctx = InvocationContext {
        json_mode: leading > 0 || trailing_json,
        command: first.clone(),
        command_args,
    };
    debug!(
        "Invocation: command={} json_mode={} args={:?}",
        ctx.command, ctx.json_mode, ctx.command_args
    );

    Invocation::Run(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn run_ctx(tokens: &[&str]) -> InvocationContext {
        match parse_invocation(&argv(tokens)) {
            Invocation::Run(ctx) => ctx,
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_help() {
        assert_eq!(parse_invocation(&[]), Invocation::Help);
        assert_eq!(parse_invocation(&argv(&["--json"])), Invocation::Help);
        assert_eq!(parse_invocation(&argv(&["-h"])), Invocation::Help);
        assert_eq!(parse_invocation(&argv(&["--json", "--help"])), Invocation::Help);
    }

    #[test]
    fn test_version() {
        assert_eq!(parse_invocation(&argv(&["--version"])), Invocation::Version);
        assert_eq!(parse_invocation(&argv(&["-v"])), Invocation::Version);
    }

    #[test]
    fn test_leading_json_is_global() {
        let ctx = run_ctx(&["--json", "validate", "a.json"]);
        assert!(ctx.json_mode);
        assert_eq!(ctx.command, "validate");
        assert_eq!(ctx.command_args, argv(&["a.json"]));
    }

    #[test]
    fn test_trailing_json_is_promoted_for_most_commands() {
        let ctx = run_ctx(&["render", "a.json", "--json", "--width", "40"]);
        assert!(ctx.json_mode);
        assert_eq!(ctx.command_args, argv(&["a.json", "--width", "40"]));

        let ctx = run_ctx(&["bogus", "--json"]);
        assert!(ctx.json_mode);
    }

    #[test]
    fn test_diff_keeps_local_json() {
        let ctx = run_ctx(&["diff", "a.json", "a.json", "--json"]);
        assert!(!ctx.json_mode);
        assert_eq!(ctx.command_args, argv(&["a.json", "a.json", "--json"]));

        let ctx = run_ctx(&["--json", "diff", "a.json", "a.json", "--json"]);
        assert!(ctx.json_mode);
    }

    #[test]
    fn test_help_after_command_is_not_global() {
        let ctx = run_ctx(&["validate", "--help"]);
        assert_eq!(ctx.command, "validate");
        assert_eq!(ctx.command_args, argv(&["--help"]));
    }
}
