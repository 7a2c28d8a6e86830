use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Best geocoding match for a free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub display_name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub lat: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub lon: f64,
}

/// Current conditions as returned by the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherData {
    current_weather: CurrentWeather,
    #[serde(default)]
    current_weather_units: Option<CurrentWeatherUnits>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct CurrentWeather {
    time: String,
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    weathercode: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct CurrentWeatherUnits {
    temperature: Option<String>,
    windspeed: Option<String>,
}

impl WeatherData {
    pub fn temperature(&self) -> f64 {
        self.current_weather.temperature
    }

    pub fn conditions(&self) -> &'static str {
        describe_weather_code(self.current_weather.weathercode)
    }

    /// Multi-line, human-readable summary. Pure function of the payload.
    pub fn format(&self) -> String {
        let current = &self.current_weather;
        let units = self.current_weather_units.as_ref();
        let temp_unit = units.and_then(|u| u.temperature.as_deref()).unwrap_or("°C");
        let wind_unit = units.and_then(|u| u.windspeed.as_deref()).unwrap_or("km/h");

        let observed = NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M")
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| current.time.clone());

        format!(
            "Conditions:  {}\n\
             Temperature: {:.1}{}\n\
             Wind:        {:.1} {} from {:.0}° ({})\n\
             Observed:    {}",
            self.conditions(),
            current.temperature,
            temp_unit,
            current.windspeed,
            wind_unit,
            current.winddirection,
            compass_point(current.winddirection),
            observed,
        )
    }
}

/// WMO weather interpretation codes as documented by Open-Meteo.
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = degrees.rem_euclid(360.0);
    let idx = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[idx]
}

/// Geocoders disagree on whether coordinates are JSON strings or numbers.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate '{s}'"))),
    }
}
