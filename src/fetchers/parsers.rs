use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::models::{MatchRecord, Player};
use crate::rating::Rating;

const TABLE_SELECTOR: &str = "table.table";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pulls players out of the ladder's rankings table.
///
/// Rows look like `rank | <a href=".../players/view/{id}">name</a> | rating`.
/// Rows without a profile link (header, footer) are skipped.
pub struct RankingsParser {
    base_url: String,
    player_id_regex: Regex,
}

impl RankingsParser {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            player_id_regex: compile_player_id_regex()?,
        })
    }

    pub fn parse(&self, html: &Html) -> Result<Vec<Player>> {
        let table = find_table(html).context("No rankings table on page")?;
        let row_selector = selector("tr")?;
        let cell_selector = selector("td")?;
        let link_selector = selector("a[href]")?;

        let mut players = Vec::new();
        for row in table.select(&row_selector) {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
            let Some((link_idx, link)) = cells
                .iter()
                .enumerate()
                .find_map(|(idx, cell)| cell.select(&link_selector).next().map(|a| (idx, a)))
            else {
                continue;
            };

            match self.parse_player(&cells, link_idx, link) {
                Some(player) => players.push(player),
                None => warn!("Skipping unreadable rankings row: {}", row_text(&row)),
            }
        }

        debug!("Parsed {} ranked players", players.len());
        Ok(players)
    }

    fn parse_player(&self, cells: &[ElementRef], link_idx: usize, link: ElementRef) -> Option<Player> {
        let href = link.value().attr("href")?;
        let id = self.parse_player_id(href)?;
        let name = element_text(&link);
        let rating = parse_rating(&element_text(cells.get(link_idx + 1)?))?;

        if name.is_empty() {
            return None;
        }

        Some(Player {
            id,
            name,
            url: self.absolute_url(href),
            rating,
        })
    }

    fn parse_player_id(&self, href: &str) -> Option<String> {
        let captures = self.player_id_regex.captures(href)?;
        Some(captures.get(1)?.as_str().to_string())
    }

    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

/// Reads one player's match table into records, newest first as listed.
///
/// Rows look like `# | date | player A | player B | score | ...`; the
/// opponent is whichever of A and B is not `player_name`.
pub fn parse_match_history(html: &Html, player_name: &str) -> Result<Vec<MatchRecord>> {
    let Some(table) = find_table(html) else {
        debug!("No match table for {}", player_name);
        return Ok(Vec::new());
    };
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let mut records = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| element_text(&cell))
            .filter(|text| !text.is_empty())
            .collect();
        if cells.len() < 4 {
            continue;
        }

        let Ok(date) = NaiveDate::parse_from_str(&cells[1], DATE_FORMAT) else {
            warn!("Skipping match row with unreadable date: {:?}", cells);
            continue;
        };
        let opponent = if cells[3] == player_name { &cells[2] } else { &cells[3] };
        records.push(MatchRecord::new(date, opponent));
    }

    Ok(records)
}

fn compile_player_id_regex() -> Result<Regex> {
    Regex::new(r"/players/view/([^/?#]+)").context("Failed to compile player ID regex")
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid selector {}: {:?}", css, e))
}

fn find_table(html: &Html) -> Option<ElementRef<'_>> {
    let table_selector = Selector::parse(TABLE_SELECTOR).ok()?;
    html.select(&table_selector).next()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn row_text(row: &ElementRef) -> String {
    row.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

// "1 234" -> 1234
fn parse_rating(text: &str) -> Option<Rating> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse().ok()
}
