//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` locally so the demo pages can be opened in a browser.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use log::{info, warn};
    use std::process::{Command, Stdio};
    use std::{env, thread, time::Duration};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

    // 1. Build wasm bundle
    info!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => {
            return Err(format!(
                "wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
            )
            .into());
        }
        Err(_) => {
            warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    // 2. Start simple HTTP server serving `static/`
    info!("Launching local server at http://127.0.0.1:{port}/ …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to start http server: {e}"))?;

    // Keep process alive while the server runs
    loop {
        if let Some(status) = server.try_wait()? {
            return Err(format!("http server exited with {status}").into());
        }
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
