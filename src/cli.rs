// src/cli.rs
// Command line front end - separated to keep main.rs down to setup and reporting

use log::info;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use crate::backends::{BigUintBackend, DigitList, DigitString, DigitVec};
use crate::config::NaturalConfig;
use crate::core::arithmetic::{NaturalNumber, INT_LIMIT};
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::BackendType;
use crate::core::static_random::StaticRandom;
use crate::expression::{evaluate, EvaluationError, Expression};
use crate::integer_math::gcd::reduce_to_gcd;
use crate::integer_math::modular::power_mod;
use crate::integer_math::primality::{generate_next_likely_prime, is_prime2};

pub const USAGE: &str = "usage: naturalnum <command> <args...>
  add|subtract|multiply|divide <a> <b>
  power <a> <p>        root <a> <r>
  gcd <a> <b>          powmod <base> <exponent> <modulus>
  is-prime <n>         next-prime <n>
  eval '<json expression>'";

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    InvalidNumber(NaturalNumberError),
    /// An operand violates the precondition of the requested operation.
    NotAllowed(String),
    Expression(serde_json::Error),
    Evaluation(EvaluationError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}\n{}", msg, USAGE),
            CliError::InvalidNumber(e) => write!(f, "{}", e),
            CliError::NotAllowed(msg) => write!(f, "{}", msg),
            CliError::Expression(e) => write!(f, "malformed expression: {}", e),
            CliError::Evaluation(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::InvalidNumber(e) => Some(e),
            CliError::Expression(e) => Some(e),
            CliError::Evaluation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NaturalNumberError> for CliError {
    fn from(e: NaturalNumberError) -> Self {
        CliError::InvalidNumber(e)
    }
}

impl From<EvaluationError> for CliError {
    fn from(e: EvaluationError) -> Self {
        CliError::Evaluation(e)
    }
}

/// Runs one command (program name already stripped) on the configured backend
/// and returns the text to print.
pub fn run(args: &[String], config: &NaturalConfig) -> Result<String, CliError> {
    info!("running on the {} backend", config.backend.name());
    match config.backend {
        BackendType::DigitString => run_with::<DigitString>(args, config),
        BackendType::DigitVec => run_with::<DigitVec>(args, config),
        BackendType::DigitList => run_with::<DigitList>(args, config),
        BackendType::BigUint => run_with::<BigUintBackend>(args, config),
    }
}

fn operands<N: NaturalNumber>(command: &str, args: &[String], count: usize) -> Result<Vec<N>, CliError> {
    if args.len() != count {
        return Err(CliError::Usage(format!(
            "{} takes {} operands, got {}",
            command,
            count,
            args.len()
        )));
    }
    args.iter()
        .map(|s| N::from_decimal(s).map_err(CliError::from))
        .collect()
}

/// Small operand for power/root, bounded like the calculator bounds it.
fn int_operand<N: NaturalNumber>(command: &str, n: &N, minimum: u64) -> Result<u32, CliError> {
    match n.to_u64() {
        Some(v) if v >= minimum && v <= INT_LIMIT => Ok(v as u32),
        _ => Err(CliError::NotAllowed(format!(
            "{}: operand must be between {} and {}",
            command, minimum, INT_LIMIT
        ))),
    }
}

fn run_with<N: NaturalNumber>(args: &[String], config: &NaturalConfig) -> Result<String, CliError> {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => return Err(CliError::Usage("missing command".to_string())),
    };

    match command {
        "add" | "subtract" | "multiply" | "divide" | "gcd" => {
            let mut ops = operands::<N>(command, rest, 2)?;
            let mut b = ops.pop().unwrap_or_default();
            let mut a = ops.pop().unwrap_or_default();
            match command {
                "add" => a.add(&b),
                "multiply" => a.multiply(&b),
                "subtract" => {
                    if b.compare_to(&a) == Ordering::Greater {
                        return Err(CliError::NotAllowed(
                            "subtract: right operand exceeds left".to_string(),
                        ));
                    }
                    a.subtract(&b);
                }
                "divide" => {
                    if b.is_zero() {
                        return Err(CliError::NotAllowed("divide: divisor is zero".to_string()));
                    }
                    let remainder = a.divide(&b);
                    return Ok(format!("{} remainder {}", a.to_decimal(), remainder.to_decimal()));
                }
                _ => reduce_to_gcd(&mut a, &mut b),
            }
            Ok(a.to_decimal())
        }
        "power" | "root" => {
            let mut ops = operands::<N>(command, rest, 2)?;
            let p = ops.pop().unwrap_or_default();
            let mut a = ops.pop().unwrap_or_default();
            if command == "power" {
                a.power(int_operand(command, &p, 0)?);
            } else {
                a.root(int_operand(command, &p, 2)?);
            }
            Ok(a.to_decimal())
        }
        "powmod" => {
            let mut ops = operands::<N>(command, rest, 3)?;
            let m = ops.pop().unwrap_or_default();
            let e = ops.pop().unwrap_or_default();
            let mut b = ops.pop().unwrap_or_default();
            if m.is_zero() {
                return Err(CliError::NotAllowed("powmod: modulus is zero".to_string()));
            }
            power_mod(&mut b, &e, &m);
            Ok(b.to_decimal())
        }
        "is-prime" | "next-prime" => {
            let mut ops = operands::<N>(command, rest, 1)?;
            let mut n = ops.pop().unwrap_or_default();
            if n.compare_to(&N::from_u64(1)) != Ordering::Greater {
                return Err(CliError::NotAllowed(format!("{}: operand must exceed 1", command)));
            }
            let mut rng = StaticRandom::from_optional_seed(config.primality.seed);
            let rounds = config.primality.witness_rounds;
            if command == "is-prime" {
                Ok(is_prime2(&mut rng, &n, rounds).to_string())
            } else {
                generate_next_likely_prime(&mut rng, &mut n, rounds);
                Ok(n.to_decimal())
            }
        }
        "eval" => {
            if rest.is_empty() {
                return Err(CliError::Usage("eval needs a JSON expression".to_string()));
            }
            let expression = Expression::from_json(&rest.join(" ")).map_err(CliError::Expression)?;
            let value: N = evaluate(&expression)?;
            Ok(value.to_decimal())
        }
        other => Err(CliError::Usage(format!("unknown command {:?}", other))),
    }
}
