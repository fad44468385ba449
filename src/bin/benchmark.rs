use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const DURATION_SECS: u64 = 15;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

struct Target {
    name: &'static str,
    method: Method,
    url: String,
    body: Option<Value>,
}

struct StageResult {
    total: u64,
    successes: u64,
    histogram: Histogram<u64>,
}

#[tokio::main]
async fn main() {
    let base_url = std::env::var("BENCH_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!("{}", "🎬 Starting Cinema Benchmark Suite".bold().green());
    println!("Target URL: {}", base_url);

    let client = match Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .cookie_store(true)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "❌ Could not build HTTP client:".red().bold(), e);
            return;
        }
    };

    if client.get(format!("{}/health", base_url)).send().await.is_err() {
        eprintln!("{}", format!("❌ Server is NOT reachable at {}. Please start it first.", base_url).red().bold());
        return;
    }

    println!("\n{}", "⚙️  Picking a showtime and opening a seat selection...".yellow());
    let (movie_id, showtime) = match pick_showtime(&client, &base_url).await {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{} {}", "❌ Setup failed:".red().bold(), e);
            return;
        }
    };
    let showtime_id = showtime["id"].as_str().unwrap_or_default().to_string();
    let hall_id = showtime["hall_id"].as_str().unwrap_or_default().to_string();

    if let Err(e) = start_selection(&client, &base_url, &movie_id, &showtime_id).await {
        eprintln!("{} {}", "❌ Setup failed:".red().bold(), e);
        return;
    }
    println!("{}", "✅ Session ready.".green());
    println!("   Movie: {}  Showtime: {}  Hall: {}", movie_id, showtime_id, hall_id);

    let targets = vec![
        Target {
            name: "Health Check",
            method: Method::GET,
            url: format!("{}/health", base_url),
            body: None,
        },
        Target {
            name: "Movie Search (Catalogue Read)",
            method: Method::GET,
            url: format!("{}/api/v1/movies?search=nolan&genres=Sci-Fi,Drama", base_url),
            body: None,
        },
        Target {
            name: "Seat Layout (Occupancy + VIP)",
            method: Method::GET,
            url: format!("{}/api/v1/halls/{}/showtimes/{}/seats", base_url, hall_id, showtime_id),
            body: None,
        },
        Target {
            name: "Toggle Seat (Session Write)",
            method: Method::POST,
            url: format!("{}/api/v1/session/selection/toggle", base_url),
            body: Some(json!({ "row": 1, "seat_number": 1 })),
        },
        Target {
            name: "Admin Dashboard Stats",
            method: Method::GET,
            url: format!("{}/api/v1/admin/stats", base_url),
            body: None,
        },
    ];

    let rps_stages = [10, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("{} {}", target.method, target.url);
        println!("{}", "=".repeat(60));

        println!("{:<10} | {:<15} | {:<15} | {:<15}", "RPS", "Mean (ms)", "P99 (ms)", "Success Rate");
        println!("{:-<10}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

        for &rps in &rps_stages {
            match run_stage(&client, &target, rps).await {
                Some(result) => print_stage(rps, &result),
                None => println!("{:<10} | {}", rps, "no samples".red()),
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    }
}

async fn pick_showtime(client: &Client, base_url: &str) -> Result<(String, Value), String> {
    let movies: Value = client.get(format!("{}/api/v1/movies", base_url))
        .send().await.map_err(|e| e.to_string())?
        .json().await.map_err(|e| e.to_string())?;

    for movie in movies.as_array().into_iter().flatten() {
        let Some(movie_id) = movie["id"].as_str() else { continue };
        let showtimes: Value = client.get(format!("{}/api/v1/movies/{}/showtimes", base_url, movie_id))
            .send().await.map_err(|e| e.to_string())?
            .json().await.map_err(|e| e.to_string())?;

        if let Some(first) = showtimes.as_array().and_then(|s| s.first()) {
            return Ok((movie_id.to_string(), first.clone()));
        }
    }
    Err("no movie with a showtime in the catalogue".into())
}

async fn start_selection(client: &Client, base_url: &str, movie_id: &str, showtime_id: &str) -> Result<(), String> {
    let res = client.post(format!("{}/api/v1/session/selection", base_url))
        .json(&json!({ "movie_id": movie_id, "showtime_id": showtime_id }))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        let status = res.status();
        let txt = res.text().await.unwrap_or_default();
        return Err(format!("start selection returned {}: {}", status, txt));
    }
    Ok(())
}

async fn run_stage(client: &Client, target: &Target, rps: u32) -> Option<StageResult> {
    let limiter = Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps)?)));

    let (tx, mut rx) = mpsc::channel(50000);
    let start_time = Instant::now();
    let duration = Duration::from_secs(DURATION_SECS);

    while start_time.elapsed() <= duration {
        if limiter.check().is_err() {
            tokio::task::yield_now().await;
            continue;
        }

        let mut req = client.request(target.method.clone(), &target.url);
        if let Some(body) = &target.body {
            req = req.json(body);
        }
        let tx = tx.clone();

        tokio::spawn(async move {
            let req_start = Instant::now();
            let success = matches!(req.send().await, Ok(r) if r.status().is_success());
            let _ = tx.send((req_start.elapsed(), success)).await;
        });
    }

    drop(tx);

    let mut result = StageResult {
        total: 0,
        successes: 0,
        histogram: Histogram::<u64>::new(3).ok()?,
    };

    while let Some((latency, success)) = rx.recv().await {
        result.total += 1;
        if success {
            result.successes += 1;
        }
        let _ = result.histogram.record(latency.as_micros() as u64);
    }

    (result.total > 0).then_some(result)
}

fn print_stage(rps: u32, result: &StageResult) {
    let mean_ms = result.histogram.mean() / 1000.0;
    let p99_ms = result.histogram.value_at_quantile(0.99) as f64 / 1000.0;
    let success_rate = (result.successes as f64 / result.total as f64) * 100.0;

    let rate = format!("{:.1}%", success_rate);
    let rate = if success_rate >= 99.0 { rate.green() } else { rate.red() };

    println!("{:<10} | {:<15.2} | {:<15.2} | {:<15}", rps, mean_ms, p99_ms, rate);
}
