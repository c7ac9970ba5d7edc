//! 対話式の画面閲覧

use crate::error::Result;
use crate::report::{self, ScreenOptions};
use agri_assist_common::{Screen, ViewSelector};
use dialoguer::Select;

/// 画面を選んで表示し、「終了」が選ばれるまで繰り返す
pub fn run_browse(start: Screen) -> Result<()> {
    let mut selector = ViewSelector::with_default(start);
    let options = ScreenOptions::default();

    let mut items: Vec<&str> = Screen::ALL.iter().map(|s| s.label()).collect();
    items.push("終了");

    loop {
        let current = Screen::ALL
            .iter()
            .position(|s| selector.is_active(*s))
            .unwrap_or(0);

        println!("\n{}\n", report::render_text(selector.active(), &options));

        let choice = Select::new()
            .with_prompt("表示する画面")
            .items(&items)
            .default(current)
            .interact_opt()?;

        match choice.and_then(|i| Screen::ALL.get(i).copied()) {
            Some(screen) => selector.select(screen),
            None => break,
        }
    }

    Ok(())
}
