use anyhow::Result;

use snake_tui::app::App;
use snake_tui::game::GameConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::new(GameConfig::default());
    app.run().await
}
