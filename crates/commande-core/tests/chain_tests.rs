mod common;

use commande_core::testing::{assert_successful, refute_successful};
use commande_core::{payload, step, Args, Chain, Command, Context, Flow, Outcome, CHAIN_RESULT};
use common::{CommandWithLogAndError, SecondCommand, StartCommand};

/// Reports which arguments reached it.
#[derive(Default)]
struct SeesArgs;

impl Command for SeesArgs {
    const OUTPUTS: &'static [&'static str] = &["saw_test", "saw_foo"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        ctx.set("saw_test", args.contains_key("test"));
        ctx.set("saw_foo", args.contains_key("foo"));
        Ok(())
    }
}

fn chain() -> Chain {
    Chain::default().then::<StartCommand>().then::<SecondCommand>()
}

fn chain_result(outcome: &Outcome) -> &Outcome {
    outcome
        .output(CHAIN_RESULT)
        .unwrap()
        .as_outcome()
        .expect("chain_result holds an outcome")
}

#[test]
fn test_can_chain_successfully() {
    let outcome = chain().call(payload! { "test" => 3 });

    assert_successful(&outcome);
    assert!(outcome.has(CHAIN_RESULT));
    let last = chain_result(&outcome);
    assert!(last.has("result"));
    assert_eq!(last.output("result").unwrap().as_str(), Some("foofoofoo"));
}

#[test]
fn test_chain_breaks_when_call_blows() {
    let outcome = chain().call(payload! { "test" => 2 });

    refute_successful(&outcome);
    assert!(outcome.has(CHAIN_RESULT));
    let last = chain_result(&outcome);
    assert!(!last.has("result"));
    assert!(last.has("foo"));
}

#[test]
fn test_broken_chain_retains_errors() {
    let outcome = chain().call(payload! { "test" => 2 });

    refute_successful(&outcome);
    assert_eq!(outcome.error().as_deref(), Some("test must at least be 3"));
    assert_eq!(outcome.errors().len(), 1);
}

#[test]
fn test_chain_collects_step_logs() {
    let outcome = chain().call(payload! { "test" => 3 });
    assert_eq!(outcome.logs(), vec!["repeating 3 times".to_string()]);
}

#[test]
fn test_empty_chain_is_invalid() {
    let outcome = Chain::default().call(payload! { "test" => 3 });

    refute_successful(&outcome);
    assert_eq!(outcome.error().as_deref(), Some("needs at least one command"));
    assert!(outcome.output(CHAIN_RESULT).unwrap().is_null());
}

#[test]
fn test_later_steps_never_run_after_failure() {
    let outcome = Chain::default()
        .then::<CommandWithLogAndError>()
        .then_step(|_args: Args| -> Outcome { panic!("must not run") })
        .call(payload! {});

    refute_successful(&outcome);
    assert_eq!(outcome.logs(), vec!["message".to_string()]);
    assert_eq!(outcome.errors(), vec!["error".to_string()]);
}

#[test]
fn test_chains_nest_and_extend() {
    let inner = Chain::default().then_step(step::<StartCommand>());
    let outer = Chain::default().then_step(inner.clone());
    let extended = inner.chain(&Chain::default().then::<SecondCommand>());

    let nested = outer.call(payload! { "test" => 4 });
    assert_successful(&nested);
    let inner_outcome = chain_result(&nested);
    assert!(chain_result(inner_outcome).has("foo"));

    let outcome = extended.call(payload! { "test" => 4 });
    assert_successful(&outcome);
    assert_eq!(
        chain_result(&outcome).output("result").unwrap().as_str(),
        Some("foofoofoofoo")
    );
}

#[test]
fn test_step_payload_replaces_chain_arguments() {
    let outcome = Chain::default()
        .then::<StartCommand>()
        .then::<SeesArgs>()
        .call(payload! { "test" => 3 });

    assert_successful(&outcome);
    let last = chain_result(&outcome);
    assert_eq!(last.output("saw_foo").unwrap().as_bool(), Some(true));
    assert_eq!(last.output("saw_test").unwrap().as_bool(), Some(false));
}
