use axum::{routing::get, Router};
use std::{net::SocketAddr, path::Path};
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer
};
use tracing_subscriber::EnvFilter;

mod config;
mod robots;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Config::from_env();

	// There's nothing to serve without a built frontend, so don't even bother binding
	let site_dir = match config.check_site_dir() {
		Ok(dir) => dir,
		Err(err) => {
			tracing::error!("{err}");
			return Ok(());
		}
	};

	tracing::info!("Serving site from {}", site_dir.display());

	let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Listening on {addr}");

	axum::serve(listener, app(site_dir)).await?;

	Ok(())
}

fn app(site_dir: &Path) -> Router {
	// It's a single page, so anything we don't have a file for just gets the page
	let index = ServeFile::new(site_dir.join("index.html"));

	Router::new()
		.route("/robots.txt", get(robots::get_robots_txt))
		.fallback_service(ServeDir::new(site_dir).fallback(index))
		.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{to_bytes, Body},
		http::{Request, StatusCode}
	};
	use std::path::PathBuf;
	use tower::ServiceExt;

	struct SiteDir(PathBuf);

	impl SiteDir {
		fn new(name: &str) -> Self {
			let dir = std::env::temp_dir().join(format!("warriors-{name}-{}", std::process::id()));
			std::fs::create_dir_all(&dir).unwrap();
			std::fs::write(dir.join("index.html"), "<html>warriors</html>").unwrap();
			std::fs::write(dir.join("app.js"), "console.log('hi')").unwrap();
			Self(dir)
		}
	}

	impl Drop for SiteDir {
		fn drop(&mut self) {
			_ = std::fs::remove_dir_all(&self.0);
		}
	}

	async fn get_body(site: &SiteDir, uri: &str) -> (StatusCode, String) {
		let res = app(&site.0)
			.oneshot(Request::get(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();

		let status = res.status();
		let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(bytes.to_vec()).unwrap())
	}

	#[tokio::test]
	async fn robots() {
		let site = SiteDir::new("robots");
		assert_eq!(get_body(&site, "/robots.txt").await, (StatusCode::OK, robots::ROBOTS_TXT.to_string()));
	}

	#[tokio::test]
	async fn serves_files_and_falls_back_to_index() {
		let site = SiteDir::new("files");

		assert_eq!(get_body(&site, "/app.js").await, (StatusCode::OK, "console.log('hi')".to_string()));
		assert_eq!(get_body(&site, "/").await, (StatusCode::OK, "<html>warriors</html>".to_string()));
		assert_eq!(get_body(&site, "/donate").await, (StatusCode::OK, "<html>warriors</html>".to_string()));
	}
}
