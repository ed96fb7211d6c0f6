//! guardexpr - apply one guard operator to typed operands

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser as ClapParser;
use guardexpr::expression::continuation;
use guardexpr::{lookup_executor, Bindings, Domain, Value};
use serde::Serialize;

/// Evaluate `LEFT OP RIGHT` the way a guarded query fragment would
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Operator token, e.g. `+`, `&&`, `<=`, `!`, `//`
    #[arg(short, long)]
    op: String,

    /// Left operand (`int:5`, `uint:5`, `float:1.5`, `complex:1,2`,
    /// `str:abc`, `bool:true`, `nil`, `invalid`, `param:NAME`)
    #[arg(short, long, default_value = "invalid")]
    left: String,

    /// Right operand, same syntax as --left
    #[arg(short, long, default_value = "invalid")]
    right: String,

    /// Parameter bindings as a JSON object
    #[arg(short, long, default_value = "{}")]
    params: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    op: &'a str,
    result: &'a Value,
    domain: Option<Domain>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let bindings = Bindings::from_json(&args.params).context("Failed to read --params")?;
    let left = parse_operand(&args.left, &bindings).context("Invalid --left operand")?;
    let right = parse_operand(&args.right, &bindings).context("Invalid --right operand")?;
    log::debug!("evaluating {} {} {}", left, args.op, right);

    let executor = lookup_executor(&args.op)?;
    let result = executor.evaluate(left, continuation(move || Ok(right)))?;

    let report = Report {
        op: &args.op,
        result: &result,
        domain: result.domain(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Parse a typed operand literal
fn parse_operand(text: &str, bindings: &Bindings) -> Result<Value> {
    match text {
        "invalid" => return Ok(Value::Invalid),
        "nil" => return Ok(Value::nil()),
        _ => {}
    }

    let (kind, raw) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("expected KIND:VALUE, got '{}'", text))?;

    let value = match kind {
        "int" => Value::Int(raw.parse().with_context(|| format!("bad int '{}'", raw))?),
        "uint" => Value::Uint(raw.parse().with_context(|| format!("bad uint '{}'", raw))?),
        "float" => Value::Float(raw.parse().with_context(|| format!("bad float '{}'", raw))?),
        "complex" => {
            let (re, im) = raw
                .split_once(',')
                .ok_or_else(|| anyhow!("expected complex:RE,IM, got '{}'", raw))?;
            Value::complex(
                re.trim().parse().context("bad real part")?,
                im.trim().parse().context("bad imaginary part")?,
            )
        }
        "str" => Value::str(raw),
        "bool" => Value::Bool(raw.parse().with_context(|| format!("bad bool '{}'", raw))?),
        "param" => bindings.get(raw),
        _ => bail!("unknown operand kind '{}'", kind),
    };
    Ok(value)
}
