use clap::Parser;
use colored::Colorize;
use schedsim::{simulate, Config, MetricsSummary, Policy, Process, SimulationResult};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser, Debug)]
#[command(author, version, about = "CPU Scheduling Simulator", long_about = None)]
struct Args {
    /// Path to the TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    config: PathBuf,

    /// Override the scenario's scheduling policy (fcfs, sjf, srtf, priority, rr)
    #[arg(short, long)]
    policy: Option<String>,

    /// Override the scenario's time quantum (Round-Robin)
    #[arg(short = 'q', long)]
    quantum: Option<u64>,

    /// Run the scenario under every policy and compare the aggregates
    #[arg(long)]
    compare: bool,

    /// Minimal output (aggregate metrics only)
    #[arg(long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Save the full result to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Tabled)]
struct TimelineRow {
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Start")]
    start: u64,
    #[tabled(rename = "End")]
    end: u64,
    #[tabled(rename = "Length")]
    length: u64,
}

#[derive(Tabled)]
struct ProcessRow {
    #[tabled(rename = "PID")]
    pid: String,
    #[tabled(rename = "Arrival")]
    arrival: u64,
    #[tabled(rename = "Burst")]
    burst: u64,
    #[tabled(rename = "Start")]
    start: u64,
    #[tabled(rename = "Completion")]
    completion: u64,
    #[tabled(rename = "Turnaround")]
    turnaround: u64,
    #[tabled(rename = "Waiting")]
    waiting: u64,
    #[tabled(rename = "Response")]
    response: u64,
}

#[derive(Tabled)]
struct CompareRow {
    #[tabled(rename = "Policy")]
    policy: String,
    #[tabled(rename = "Avg Turnaround")]
    avg_turnaround: String,
    #[tabled(rename = "Avg Waiting")]
    avg_waiting: String,
    #[tabled(rename = "Avg Response")]
    avg_response: String,
    #[tabled(rename = "Throughput")]
    throughput: String,
    #[tabled(rename = "End")]
    end_time: u64,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let use_color = !args.no_color;

    if !args.quiet {
        if use_color {
            println!("{}", "CPU Scheduling Simulator".bright_cyan().bold());
        } else {
            println!("CPU Scheduling Simulator");
        }
        println!("Loading scenario from: {:?}\n", args.config);
    }

    let config = match Config::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading scenario: {}", e);
            std::process::exit(1);
        }
    };

    let quantum = args.quantum.or(config.scheduler.quantum);

    if args.compare {
        run_comparison(&config.processes, quantum, use_color);
        return;
    }

    let policy = match resolve_policy(&args, &config) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match simulate(policy, &config.processes, quantum) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let summary = MetricsSummary::from_result(&result);

    if !args.quiet {
        print_timeline(policy, &result, use_color);
        print_process_table(&config.processes, &result, use_color);
    }
    summary.print();

    if let Some(output_path) = args.output {
        match save_result_json(&result, &summary, &output_path) {
            Ok(_) => {
                if !args.quiet {
                    println!("\nResult saved to: {:?}", output_path);
                }
            }
            Err(e) => {
                eprintln!("Error saving result to JSON: {}", e);
            }
        }
    }
}

fn resolve_policy(args: &Args, config: &Config) -> Result<Policy, schedsim::SimulationError> {
    match &args.policy {
        Some(name) => Policy::from_str(name),
        None => config.policy(),
    }
}

fn print_timeline(policy: Policy, result: &SimulationResult, use_color: bool) {
    if use_color {
        println!("{} ({})", "TIMELINE".yellow().bold(), policy);
    } else {
        println!("TIMELINE ({})", policy);
    }

    let strip: Vec<String> = result
        .blocks
        .iter()
        .map(|b| format!("{}[{}-{}]", b.owner, b.start, b.end))
        .collect();
    println!("  {}\n", strip.join(" "));

    let rows: Vec<TimelineRow> = result
        .blocks
        .iter()
        .map(|b| TimelineRow {
            owner: b.owner.to_string(),
            start: b.start,
            end: b.end,
            length: b.len(),
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());
}

fn print_process_table(processes: &[Process], result: &SimulationResult, use_color: bool) {
    if use_color {
        println!("\n{}", "PER-PROCESS METRICS".yellow().bold());
    } else {
        println!("\nPER-PROCESS METRICS");
    }

    let mut rows = Vec::new();
    for (pid, record) in &result.results {
        let process = processes
            .iter()
            .find(|p| &p.pid == pid)
            .expect("result for unknown pid");
        rows.push(ProcessRow {
            pid: pid.clone(),
            arrival: process.arrival,
            burst: process.burst,
            start: record.start,
            completion: record.completion,
            turnaround: record.turnaround,
            waiting: record.waiting,
            response: record.response,
        });
    }
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());
}

fn run_comparison(processes: &[Process], quantum: Option<u64>, use_color: bool) {
    if use_color {
        println!("{}", "POLICY COMPARISON".yellow().bold());
    } else {
        println!("POLICY COMPARISON");
    }

    let mut rows = Vec::new();
    for policy in Policy::ALL {
        if policy.needs_quantum() && quantum.is_none() {
            log::warn!("skipping {}: no quantum configured", policy);
            continue;
        }
        match simulate(policy, processes, quantum) {
            Ok(result) => {
                let summary = MetricsSummary::from_result(&result);
                rows.push(CompareRow {
                    policy: policy.to_string(),
                    avg_turnaround: format!("{:.2}", summary.avg_turnaround),
                    avg_waiting: format!("{:.2}", summary.avg_waiting),
                    avg_response: format!("{:.2}", summary.avg_response),
                    throughput: format!("{:.4}", summary.throughput),
                    end_time: summary.end_time,
                });
            }
            Err(e) => {
                eprintln!("Error under {}: {}", policy, e);
                std::process::exit(1);
            }
        }
    }
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());
}

fn save_result_json(
    result: &SimulationResult,
    summary: &MetricsSummary,
    path: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    use serde_json::json;

    let json_data = json!({
        "blocks": result.blocks,
        "results": result.results,
        "end_time": result.end_time,
        "origin": result.origin,
        "summary": summary,
    });

    std::fs::write(path, serde_json::to_string_pretty(&json_data)?)?;
    Ok(())
}
