//! Prompt construction for the generative architect.

use twin_types::DeviceRequirement;

/// Character budget for the rendered prompt. Keeps the request
/// bounded for small local models.
pub const MAX_PROMPT_CHARS: usize = 4096;

/// Render a requirement into the instruction block sent to the
/// backend: architect role, requirement fields verbatim, and a strict
/// single-JSON-object output contract.
pub fn build_prompt(requirement: &DeviceRequirement) -> String {
    let functional = requirement.functional_requirements.join("; ");
    let constraints = requirement
        .constraints
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("; ");

    let prompt = format!(
        "You are a medical device system architect.\n\
         \n\
         Based on the following requirements, generate a system design\n\
         with components and interfaces.\n\
         \n\
         Requirements:\n\
         Device Type: {}\n\
         Device Class: {}\n\
         Functional Requirements: {}\n\
         Constraints: {}\n\
         \n\
         Respond ONLY with a single valid JSON object of this shape,\n\
         and nothing else:\n\
         {{\n\
           \"components\": {{\n\
             \"MCU\": \"example\",\n\
             \"Sensor\": \"example\"\n\
           }},\n\
           \"interfaces\": [\"I2C\", \"ADC\", \"PWM\"]\n\
         }}\n",
        requirement.device_type, requirement.device_class, functional, constraints
    );

    truncate_chars(prompt, MAX_PROMPT_CHARS)
}

/// Truncate to at most `limit` characters, respecting char
/// boundaries.
fn truncate_chars(mut text: String, limit: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(limit) {
        text.truncate(idx);
    }
    text
}
