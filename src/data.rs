// src/data.rs

use crate::model::{Country, OPTIONS_PER_QUESTION};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;

/// Endpoint público con los nombres comunes y banderas de todos los países
pub const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

// Forma del payload de restcountries: solo usamos name.common y flags.png
#[derive(Deserialize)]
struct ApiCountry {
    name: ApiName,
    flags: ApiFlags,
}

#[derive(Deserialize)]
struct ApiName {
    common: String,
}

#[derive(Deserialize)]
struct ApiFlags {
    png: String,
}

/// Descarga el listado completo de países en una sola petición.
pub fn fetch_countries() -> Result<Vec<Country>, Box<dyn Error + Send + Sync>> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let body = client
        .get(COUNTRIES_ENDPOINT)
        .header(USER_AGENT, "FlagQuiz/0.1")
        .send()?
        .error_for_status()?
        .text()?;
    parse_countries(&body)
}

/// Convierte el payload JSON en el pool de países.
/// Descarta nombres duplicados y rechaza listados con menos de 4 entradas.
pub fn parse_countries(payload: &str) -> Result<Vec<Country>, Box<dyn Error + Send + Sync>> {
    let raw: Vec<ApiCountry> = serde_json::from_str(payload)?;

    let mut vistos = HashSet::new();
    let paises: Vec<Country> = raw
        .into_iter()
        .filter(|c| vistos.insert(c.name.common.clone()))
        .map(|c| Country {
            name: c.name.common,
            flag_png: c.flags.png,
        })
        .collect();

    if paises.len() < OPTIONS_PER_QUESTION {
        return Err(format!(
            "el listado solo contiene {} países y hacen falta al menos {}",
            paises.len(),
            OPTIONS_PER_QUESTION
        )
        .into());
    }

    Ok(paises)
}
