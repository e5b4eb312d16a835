// It's a marketing page, we want everyone to crawl it
pub static ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

#[allow(clippy::unused_async)]
pub async fn get_robots_txt() -> &'static str {
	ROBOTS_TXT
}
