use anyhow::Result;
use calprint_core::view::ViewOptions;

use crate::render;

pub fn run(year: i32, options: ViewOptions) -> Result<()> {
    println!("{}", render::year_view(year, &options));
    Ok(())
}
