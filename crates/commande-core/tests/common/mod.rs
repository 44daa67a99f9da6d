//! Fixture commands shared by the integration tests

#![allow(dead_code)]

use commande_core::{Args, Command, Context, Flow, Record};

/// Records a non-fatal error, a fatal one, then one that must never run.
#[derive(Default)]
pub struct CommandWithError;

impl Command for CommandWithError {
    fn body(&mut self, ctx: &mut Context, _args: &Args) -> Flow {
        ctx.error("first");
        ctx.fatal("fatal")?;
        ctx.error("nope");
        Ok(())
    }
}

#[derive(Default)]
pub struct CommandWithLog;

impl Command for CommandWithLog {
    fn body(&mut self, ctx: &mut Context, _args: &Args) -> Flow {
        ctx.log("message");
        Ok(())
    }
}

#[derive(Default)]
pub struct CommandWithLogAndError;

impl Command for CommandWithLogAndError {
    fn body(&mut self, ctx: &mut Context, _args: &Args) -> Flow {
        ctx.log("message");
        ctx.error("error");
        Ok(())
    }
}

/// Declares `foo` and `baz`, sets `foo` and an undeclared slot.
#[derive(Default)]
pub struct CommandWithOutput;

impl Command for CommandWithOutput {
    const OUTPUTS: &'static [&'static str] = &["foo", "baz"];

    fn body(&mut self, ctx: &mut Context, _args: &Args) -> Flow {
        ctx.set("foo", "foo");
        ctx.set("not_an_output", "not_an_output");
        Ok(())
    }
}

/// Validity is whatever the `expression` argument says.
#[derive(Default)]
pub struct ValidatableCommand;

impl Command for ValidatableCommand {
    const OUTPUTS: &'static [&'static str] = &["foo"];

    fn valid(&mut self, _ctx: &mut Context, args: &Args) -> Flow<bool> {
        Ok(args
            .get("expression")
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }

    fn body(&mut self, ctx: &mut Context, _args: &Args) -> Flow {
        ctx.set("foo", "foo");
        Ok(())
    }
}

/// Fails with the value as error message when given a string.
#[derive(Default)]
pub struct FailOnStringCommand;

impl Command for FailOnStringCommand {
    const OUTPUTS: &'static [&'static str] = &["inner_output"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        let value = args.get("value").cloned().unwrap_or_default();
        ctx.set("inner_output", value.clone());
        if let Some(message) = value.as_str() {
            ctx.fatal(message)?;
        }
        Ok(())
    }
}

/// Sets `foo`, transfers a nested call, then sets `bar`.
#[derive(Default)]
pub struct OuterCommand;

impl Command for OuterCommand {
    const OUTPUTS: &'static [&'static str] = &["foo", "bar"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        ctx.set("foo", "foo");
        let inner = FailOnStringCommand::invoke(args.clone());
        ctx.transfer_or_fail(&inner, None)?;
        ctx.set("bar", "bar");
        Ok(())
    }
}

/// Like `OuterCommand` but uses the non-aborting transfer.
#[derive(Default)]
pub struct LenientOuterCommand;

impl Command for LenientOuterCommand {
    const OUTPUTS: &'static [&'static str] = &["foo", "bar", "inner_ok"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        ctx.set("foo", "foo");
        let inner = FailOnStringCommand::invoke(args.clone());
        let inner_ok = ctx.transfer(&inner, Some("inner"));
        ctx.set("inner_ok", inner_ok);
        ctx.set("bar", "bar");
        Ok(())
    }
}

/// Requires `test >= 3`; sets `foo` to "foo" repeated `test` times.
#[derive(Default)]
pub struct StartCommand;

impl Command for StartCommand {
    const OUTPUTS: &'static [&'static str] = &["foo", "baz"];

    fn valid(&mut self, ctx: &mut Context, args: &Args) -> Flow<bool> {
        let test = args.get("test").and_then(|v| v.as_i64()).unwrap_or(0);
        if test < 3 {
            ctx.fatal("test must at least be 3")?;
        }
        Ok(true)
    }

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        let test = args.get("test").and_then(|v| v.as_i64()).unwrap_or(0);
        ctx.log(format!("repeating {} times", test));
        ctx.set("foo", "foo".repeat(test as usize));
        ctx.set("not_an_output", "not_an_output");
        Ok(())
    }
}

/// Copies `foo` into `result`.
#[derive(Default)]
pub struct SecondCommand;

impl Command for SecondCommand {
    const OUTPUTS: &'static [&'static str] = &["result"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        let foo = args.get("foo").cloned().unwrap_or_default();
        ctx.set("result", foo);
        Ok(())
    }
}

/// Stops early without failing once `stop` is true.
#[derive(Default)]
pub struct EndingCommand;

impl Command for EndingCommand {
    const OUTPUTS: &'static [&'static str] = &["before", "after"];

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        ctx.set("before", true);
        if args.get("stop").and_then(|v| v.as_bool()).unwrap_or(false) {
            ctx.end()?;
        }
        ctx.set("after", true);
        Ok(())
    }
}

/// A persisted-entity collaborator for record transfers.
pub struct FakeRecord {
    pub valid: bool,
    pub persisted: bool,
    pub errors: Vec<String>,
    pub full_messages: Option<Vec<String>>,
}

impl Record for FakeRecord {
    fn valid(&self) -> bool {
        self.valid
    }

    fn persisted(&self) -> bool {
        self.persisted
    }

    fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    fn full_messages(&self) -> Option<Vec<String>> {
        self.full_messages.clone()
    }
}
