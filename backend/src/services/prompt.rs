//! Prompt construction for the generative text model
//!
//! Pure functions: a fixed textual layout with the language directive first,
//! then the structured values. Missing optional readings are rendered as the
//! literal word `None` rather than rejected; only the fields each endpoint
//! validates up front are guaranteed present here.

use shared::Language;

/// Render an optional reading the way the prompts embed it
fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// Structured weather context for summary prompts
#[derive(Debug, Clone, Default)]
pub struct WeatherPromptContext {
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: f64,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub uv_index: Option<f64>,
}

/// Prompt for a short 1-3 sentence weather summary
pub fn weather_summary_prompt(language: Language, ctx: &WeatherPromptContext) -> String {
    format!(
        "{directive}\n\
         Write a concise 1–3 sentence weather summary for farmers in:\n\
         City: {city}, State: {state}, Country: {country}, Coordinates: ({lat}, {lon})\n\
         \n\
         Current conditions:\n\
         - Temperature: {temp}°C\n\
         - Humidity: {humidity}%\n\
         - Rainfall (today): {rainfall} mm\n\
         - Wind Speed: {wind} m/s\n\
         - Pressure: {pressure} hPa\n\
         - UV Index: {uv}\n\
         \n\
         Keep it plain text (no bullets, no markdown), easy to read, practical, and neutral. \
         Mention likely comfort/heat/cold and any caution if rainfall, wind or UV looks notable.",
        directive = language.summary_directive(),
        city = ctx.city,
        state = ctx.state,
        country = ctx.country,
        lat = fmt_opt(ctx.lat),
        lon = fmt_opt(ctx.lon),
        temp = fmt_opt(ctx.temperature),
        humidity = fmt_opt(ctx.humidity),
        rainfall = ctx.rainfall,
        wind = fmt_opt(ctx.wind_speed),
        pressure = fmt_opt(ctx.pressure),
        uv = fmt_opt(ctx.uv_index),
    )
}

/// Prompt for the personalized crop advisory
pub fn advisory_prompt(
    language: Language,
    crop: &str,
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    pollution_level: f64,
) -> String {
    format!(
        "{directive}\n\
         \n\
         Generate a personalized advisory for growing {crop} with:\n\
         - Temperature: {temperature}°C\n\
         - Humidity: {humidity}%\n\
         - Rainfall: {rainfall}mm\n\
         - Pollution level: {pollution_level}\n\
         \n\
         Provide plain text only (no markdown, no bullets, no numbered lists).\n\
         Write short paragraphs with clear sentences covering crop care, irrigation,\n\
         nutrients, weed/pest management, and practical tips.",
        directive = language.advice_directive(),
    )
}

/// Prompt for stage-specific crop care recommendations
pub fn crop_care_prompt(
    language: Language,
    crop_name: &str,
    growth_stage: &str,
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    mq2: f64,
) -> String {
    format!(
        "{directive}\n\
         \n\
         As an expert agricultural advisor, provide specific care recommendations for \
         {crop_name} crops that are currently in the {growth_stage} stage.\n\
         \n\
         Current Environmental Conditions:\n\
         - Temperature: {temperature}°C\n\
         - Humidity: {humidity}%\n\
         - Rainfall: {rainfall}mm\n\
         - Air Quality (MQ2): {mq2}\n\
         \n\
         Please provide:\n\
         1. Immediate actions needed (next 24-48 hours)\n\
         2. Weekly care schedule\n\
         3. Pest and disease prevention measures\n\
         4. Nutrient management recommendations\n\
         5. Weather adaptation strategies\n\
         \n\
         Format as clear, actionable advice for farmers in the selected language.",
        directive = language.advice_directive(),
    )
}

/// Prompt for educational video recommendations
pub fn educational_videos_prompt(
    language: Language,
    crop_name: &str,
    growth_stage: &str,
    temperature: Option<f64>,
    humidity: Option<f64>,
    rainfall: Option<f64>,
) -> String {
    format!(
        "{directive}\n\
         \n\
         Based on the following agricultural conditions, suggest 4 relevant YouTube \
         educational videos for farmers:\n\
         \n\
         Current Conditions:\n\
         - Crop: {crop_name}\n\
         - Growth Stage: {growth_stage}\n\
         - Temperature: {temp}°C\n\
         - Humidity: {humidity}%\n\
         - Rainfall: {rainfall}mm\n\
         \n\
         Please provide 4 specific YouTube video recommendations with:\n\
         1. Video title\n\
         2. Brief description of why it's relevant\n\
         3. Suggested YouTube video ID or search terms\n\
         4. Category (Smart Farming, Crop Care, Soil Management, Weather Monitoring, Pest Control, Irrigation, etc.)\n\
         \n\
         Format the response as a JSON array with objects containing: \
         title, description, search_terms, category, relevance_reason",
        directive = language.video_directive(),
        temp = fmt_opt(temperature),
        humidity = fmt_opt(humidity),
        rainfall = fmt_opt(rainfall),
    )
}

/// Prompt for the farmer chatbot
pub fn chatbot_prompt(message: &str) -> String {
    format!("Farmer question: {message}\nGive a helpful, clear answer.")
}

/// Advisory image URL derived from the crop name
pub fn advisory_image_url(crop: &str) -> String {
    format!(
        "https://example.com/images/{}_advisory.png",
        crop.replace(' ', "_").to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_readings_render_as_none() {
        let ctx = WeatherPromptContext {
            city: "Mysuru".to_string(),
            ..Default::default()
        };
        let prompt = weather_summary_prompt(Language::En, &ctx);
        assert!(prompt.contains("Temperature: None°C"));
        assert!(prompt.contains("Wind Speed: None m/s"));
        assert!(prompt.contains("Rainfall (today): 0 mm"));
    }

    #[test]
    fn test_directive_leads_the_prompt() {
        let prompt = advisory_prompt(Language::Hi, "rice", 30.0, 60.0, 5.0, 1.0);
        assert!(prompt.starts_with("Provide farming advice in Hindi"));
        assert!(prompt.contains("growing rice"));
        assert!(prompt.contains("Temperature: 30°C"));
    }

    #[test]
    fn test_crop_care_prompt_embeds_stage() {
        let prompt = crop_care_prompt(Language::En, "wheat", "flowering", 25.0, 70.0, 2.0, 0.0);
        assert!(prompt.contains("wheat crops that are currently in the flowering stage"));
        assert!(prompt.contains("Air Quality (MQ2): 0"));
    }

    #[test]
    fn test_videos_prompt_asks_for_json_array() {
        let prompt =
            educational_videos_prompt(Language::En, "maize", "vegetative", None, None, None);
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("Temperature: None°C"));
    }

    #[test]
    fn test_chatbot_prompt_layout() {
        assert_eq!(
            chatbot_prompt("when to sow?"),
            "Farmer question: when to sow?\nGive a helpful, clear answer."
        );
    }

    #[test]
    fn test_advisory_image_url() {
        assert_eq!(
            advisory_image_url("rice"),
            "https://example.com/images/rice_advisory.png"
        );
        assert_eq!(
            advisory_image_url("Kidney Beans"),
            "https://example.com/images/kidney_beans_advisory.png"
        );
    }
}
