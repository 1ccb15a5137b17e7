//! Walks through differentiation and simplification of a few sample
//! expressions.
//!
//! Set `UNIVAR_LOG` to `trace` to see each simplification rule as it fires.

use log::{info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use univar_expr::{add, constant, multiply, variable, Registers};

fn log_level() -> LevelFilter {
    match std::env::var("UNIVAR_LOG") {
        Ok(level) => match level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            other => {
                eprintln!("Unknown UNIVAR_LOG level {other:?}, using warn");
                LevelFilter::Warn
            }
        },
        Err(_) => LevelFilter::Warn,
    }
}

fn main() {
    let logger = CombinedLogger::init(vec![TermLogger::new(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
    if let Err(err) = logger {
        eprintln!("Logging disabled: {err}");
    }

    // f(x) = x + 2x
    let f = add(variable(), multiply(constant(2.0), variable()));

    println!("--- x + 2x: differentiate, then simplify ---");
    println!("f(x)              = {f}");
    let df = f.derivative();
    println!("f'(x) (raw)       = {df}");
    println!("f'(x) (simplified) = {}", df.simplify());

    println!();
    println!("--- x + 2x: simplify, then differentiate ---");
    println!("f(x)              = {f}");
    let f_simplified = f.simplify();
    println!("f(x) (simplified) = {f_simplified}");
    let df = f_simplified.derivative();
    println!("f'(x)             = {df}");
    println!("f'(x) (simplified) = {}", df.simplify());

    println!();
    println!("--- g(x) = x * x ---");
    let g = multiply(variable(), variable());
    println!("g(x)              = {g}");
    let dg = g.derivative();
    println!("g'(x) (raw)       = {dg}");
    let dg = dg.simplify();
    println!("g'(x) (simplified) = {dg}");
    println!("g'(5)             = {}", dg.evaluate(5.0));

    let xs: Vec<f64> = (0..=5).map(f64::from).collect();
    let mut registers = Registers::new(xs.len());
    let values = dg.evaluate_many(&xs, &mut registers);
    println!("g'({xs:?}) = {values:?}");
    info!(
        "vectorized evaluation used {} registers of length {}",
        registers.num_allocations(),
        registers.register_length()
    );
}
