use anyhow::Result;
use calprint_core::holiday;

use crate::render;

pub fn run(year: i32, json: bool) -> Result<()> {
    if json {
        let holidays = holiday::holidays_for_year(year);
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        println!("{}", render::holiday_table(year));
    }

    Ok(())
}
