//! Command that prints lotto numbers derived from UUIDv4 strings

use std::{io, io::Write, process::ExitCode};

use clap::Parser;
use log::{debug, info, warn};
use uuid_lotto::{AttemptBudget, Session, V4Generator};

#[derive(Parser)]
#[command(name = "uuid-lotto")]
#[command(about = "Derive six lotto numbers (1-45) from a UUIDv4")]
struct Cli {
    /// UUIDv4 strings to derive numbers from; random ones are generated when omitted
    uuids: Vec<String>,

    /// Maximum number of 4-digit chunks to consume per UUID (1-100)
    #[arg(
        short = 'n',
        long,
        env = "UUID_LOTTO_MAX_ATTEMPTS",
        default_value_t = AttemptBudget::DEFAULT
    )]
    max_attempts: AttemptBudget,

    /// Number of random UUIDs to generate when none are given
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible random UUIDs
    #[arg(long)]
    seed: Option<u64>,

    /// Print numbers in ascending order instead of the order they were drawn
    #[arg(long, default_value_t = false)]
    sort: bool,

    /// Print one JSON object per ticket
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> io::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.max_attempts.is_performance_risk() {
        warn!(
            "attempt budget {} exceeds {}; only {} chunks exist per UUID",
            cli.max_attempts,
            AttemptBudget::WARN_THRESHOLD,
            uuid_lotto::CHUNK_COUNT
        );
    }

    let mut out = io::BufWriter::new(io::stdout().lock());
    let all_ok = run(&cli, &mut out)?;
    out.flush()?;
    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Derives one ticket per positional UUID, or `--count` tickets from generated UUIDs when none
/// are given. Returns `true` only if every ticket succeeded.
fn run(cli: &Cli, out: &mut impl Write) -> io::Result<bool> {
    let mut session = Session::new(cli.max_attempts);
    let mut all_ok = true;

    if cli.uuids.is_empty() {
        let mut generator = match cli.seed {
            Some(seed) => {
                info!("generating {} UUIDs from seed {}", cli.count, seed);
                V4Generator::from_seed_u64(seed)
            }
            None => V4Generator::from_entropy(),
        };
        for _ in 0..cli.count {
            let _ = session.generate_with(&mut generator);
            all_ok &= report(out, &session, cli)?;
        }
    } else {
        for uuid in &cli.uuids {
            session.set_uuid_input(uuid.as_str());
            let _ = session.generate_from_input();
            all_ok &= report(out, &session, cli)?;
        }
    }

    Ok(all_ok)
}

/// Writes the outcome of the last derivation and returns whether it succeeded.
fn report(out: &mut impl Write, session: &Session, cli: &Cli) -> io::Result<bool> {
    let uuid = session.uuid_input();
    match (session.numbers(), session.error()) {
        (Some(numbers), _) => {
            debug!("{} -> {}", uuid, numbers);
            if cli.json {
                let line = if cli.sort {
                    serde_json::json!({ "uuid": uuid, "numbers": numbers.sorted() })
                } else {
                    serde_json::json!({ "uuid": uuid, "numbers": numbers })
                };
                writeln!(out, "{}", line)?;
            } else if cli.sort {
                let joined: Vec<String> =
                    numbers.sorted().iter().map(u8::to_string).collect();
                writeln!(out, "{}: {}", uuid, joined.join(", "))?;
            } else {
                writeln!(out, "{}: {}", uuid, numbers)?;
            }
            Ok(true)
        }
        (None, Some(e)) => {
            debug!("{} -> {:?}", uuid, e);
            if cli.json {
                let line = serde_json::json!({ "uuid": uuid, "error": e.to_string() });
                writeln!(out, "{}", line)?;
            } else {
                eprintln!("Error: {}: {} ({})", uuid, session, e);
            }
            Ok(false)
        }
        (None, None) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli};
    use clap::Parser;
    use uuid_lotto::AttemptBudget;

    const EXAMPLE: &str = "123e4567-e89b-42d3-a456-426614174000";

    fn run_args(args: &[&str]) -> (String, bool) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut buf = Vec::new();
        let ok = run(&cli, &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), ok)
    }

    /// Parses defaults
    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["uuid-lotto"]).unwrap();
        assert!(cli.uuids.is_empty());
        assert_eq!(cli.max_attempts, AttemptBudget::DEFAULT);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.seed, None);
        assert!(!cli.sort && !cli.json);
    }

    /// Rejects out-of-range budgets
    #[test]
    fn rejects_out_of_range_budgets() {
        assert!(Cli::try_parse_from(["uuid-lotto", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["uuid-lotto", "-n", "101"]).is_err());
        assert!(Cli::try_parse_from(["uuid-lotto", "-n", "many"]).is_err());
        let cli = Cli::try_parse_from(["uuid-lotto", "--max-attempts", "100"]).unwrap();
        assert_eq!(cli.max_attempts.get(), 100);
    }

    /// Prints numbers in draw order or sorted
    #[test]
    fn prints_numbers_in_draw_order_or_sorted() {
        let (out, ok) = run_args(&["uuid-lotto", EXAMPLE]);
        assert!(ok);
        assert_eq!(out, format!("{}: 36, 38, 13, 8, 41, 34\n", EXAMPLE));

        let (out, ok) = run_args(&["uuid-lotto", "--sort", EXAMPLE]);
        assert!(ok);
        assert_eq!(out, format!("{}: 8, 13, 34, 36, 38, 41\n", EXAMPLE));
    }

    /// Prints JSON lines
    #[test]
    fn prints_json_lines() {
        let (out, ok) = run_args(&["uuid-lotto", "--json", EXAMPLE]);
        assert!(ok);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["uuid"], EXAMPLE);
        assert_eq!(v["numbers"], serde_json::json!([36, 38, 13, 8, 41, 34]));

        let (out, _) = run_args(&["uuid-lotto", "--json", "--sort", EXAMPLE]);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["numbers"], serde_json::json!([8, 13, 34, 36, 38, 41]));

        let (out, ok) = run_args(&["uuid-lotto", "--json", "not-a-uuid"]);
        assert!(!ok);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            v["error"],
            "invalid UUID v4: invalid string representation"
        );
    }

    /// Reports failures without output on stdout
    #[test]
    fn reports_failures_without_output_on_stdout() {
        let (out, ok) = run_args(&["uuid-lotto", "-n", "3", EXAMPLE]);
        assert!(!ok);
        assert!(out.is_empty());
    }

    /// Fails the whole run if any ticket fails but prints the others
    #[test]
    fn fails_the_whole_run_if_any_ticket_fails_but_prints_the_others() {
        let (out, ok) = run_args(&["uuid-lotto", EXAMPLE, "not-a-uuid"]);
        assert!(!ok);
        assert_eq!(out, format!("{}: 36, 38, 13, 8, 41, 34\n", EXAMPLE));

        let (out, ok) = run_args(&["uuid-lotto", "not-a-uuid", EXAMPLE]);
        assert!(!ok);
        assert_eq!(out.lines().count(), 1);
    }

    /// Generates the requested number of tickets reproducibly from a seed
    #[test]
    fn generates_the_requested_number_of_tickets_reproducibly_from_a_seed() {
        let args = ["uuid-lotto", "--seed", "1", "-c", "3", "-n", "100"];
        let (first, first_ok) = run_args(&args);
        let (second, second_ok) = run_args(&args);
        assert_eq!(first, second);
        assert_eq!(first_ok, second_ok);
        assert_eq!(first.lines().count(), 3);
        for line in first.lines() {
            let (uuid, numbers) = line.split_once(": ").unwrap();
            assert!(uuid_lotto::Uuid::parse_v4(uuid).is_ok());
            assert_eq!(
                uuid_lotto::derive(uuid, 100).map(|e| e.to_string()),
                Ok(numbers.to_owned())
            );
        }

        let (other, _) = run_args(&["uuid-lotto", "--seed", "2", "-c", "3", "-n", "100"]);
        assert_ne!(first, other);
    }

    /// Generates one random ticket by default
    #[test]
    fn generates_one_random_ticket_by_default() {
        let (out, ok) = run_args(&["uuid-lotto", "--json"]);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        let uuid = v["uuid"].as_str().unwrap();
        assert!(uuid_lotto::Uuid::parse_v4(uuid).is_ok());
        assert_eq!(ok, v.get("numbers").is_some());
    }
}
