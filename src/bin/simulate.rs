//! Economy balance simulator CLI.
//!
//! Rolls loot for many synthetic session ids and samples the reward
//! economy to sanity-check tuning.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 10000 rolls, 30 min, level 10
//!   cargo run --bin simulate -- -n 50000 -m 120   # long sessions
//!   cargo run --bin simulate -- --class warrior   # with class affinity

use focusquest::actions::Action;
use focusquest::economy::rewards::{compute_coins, compute_xp};
use focusquest::loot::catalog::default_catalog;
use focusquest::loot::rarity::{apply_adjustments, normalize, BASE_RARITY_WEIGHTS};
use focusquest::loot::roller::roll_loot;
use focusquest::loot::types::Rarity;
use std::env;

struct SimConfig {
    rolls: u32,
    minutes: f64,
    level: u32,
    class: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rolls: 10_000,
            minutes: 30.0,
            level: 10,
            class: None,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("FocusQuest economy simulator");
    println!("  Rolls:    {}", config.rolls);
    println!("  Minutes:  {}", config.minutes);
    println!("  Level:    {}", config.level);
    if let Some(class) = &config.class {
        println!("  Class:    {class}");
    }
    println!();

    report_rarity(&config);
    report_rewards(&config);
}

fn report_rarity(config: &SimConfig) {
    let catalog = default_catalog();
    let mut counts = [0u32; 5];
    let mut misses = 0u32;

    for i in 0..config.rolls {
        let id = format!("sim-session-{i}");
        match roll_loot(
            &id,
            config.minutes,
            config.level,
            config.class.as_deref(),
            &catalog,
        ) {
            Some(item) => counts[item.rarity as usize] += 1,
            None => misses += 1,
        }
    }

    let expected = normalize(apply_adjustments(
        BASE_RARITY_WEIGHTS,
        config.minutes,
        config.class.is_some(),
    ));

    println!("Rarity distribution (items won):");
    println!("  {:<12} {:>8} {:>10} {:>10}", "tier", "count", "actual", "expected");
    for rarity in Rarity::all() {
        let idx = rarity as usize;
        let actual = counts[idx] as f64 / config.rolls as f64 * 100.0;
        println!(
            "  {:<12} {:>8} {:>9.2}% {:>9.2}%",
            rarity.name(),
            counts[idx],
            actual,
            expected[idx] * 100.0
        );
    }
    println!(
        "  {:<12} {:>8} {:>9.2}%",
        "(no loot)",
        misses,
        misses as f64 / config.rolls as f64 * 100.0
    );
    println!();
}

fn report_rewards(config: &SimConfig) {
    let mut rng = rand::thread_rng();
    let samples = config.rolls.max(1);

    println!("Average rewards at {} minutes (success):", config.minutes);
    for action in [Action::Train, Action::Fight, Action::Sleep] {
        let total: u64 = (0..samples)
            .map(|_| compute_xp(config.minutes, action, 0, 1.0, &mut rng))
            .sum();
        println!(
            "  {:<10} {:>7.1} xp",
            action.meta().label,
            total as f64 / samples as f64
        );
    }
    let coins: u64 = (0..samples)
        .map(|_| compute_coins(config.minutes, 1.0, &mut rng))
        .sum();
    println!("  {:<10} {:>7.1} coins", "any", coins as f64 / samples as f64);
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--rolls" => {
                if i + 1 < args.len() {
                    config.rolls = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-m" | "--minutes" => {
                if i + 1 < args.len() {
                    config.minutes = args[i + 1].parse().unwrap_or(30.0);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.level = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--class" => {
                if i + 1 < args.len() {
                    config.class = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Usage: simulate [-n ROLLS] [-m MINUTES] [-l LEVEL] [--class NAME]");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}
