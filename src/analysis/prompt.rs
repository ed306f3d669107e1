//! The fixed scoring prompt sent to the language model.
//!
//! The template embeds the transcript verbatim and spells out the exact JSON
//! shape; [`super::parse_analysis`] enforces the shape on the way back.

/// Build the scoring prompt for one transcript.
pub fn build_prompt(transcript: &str) -> String {
    format!(
        "Analyze the following IELTS speaking response and provide scores and feedback:\n\
         Response: {transcript}\n\
         \n\
         Provide analysis in the following JSON format:\n\
         {{\n\
         \x20   \"scores\": {{\n\
         \x20       \"fluency\": <score 0-9>,\n\
         \x20       \"vocabulary\": <score 0-9>,\n\
         \x20       \"grammar\": <score 0-9>,\n\
         \x20       \"pronunciation\": <score 0-9>\n\
         \x20   }},\n\
         \x20   \"feedback\": {{\n\
         \x20       \"strengths\": [<list of strengths>],\n\
         \x20       \"improvements\": [<list of areas to improve>]\n\
         \x20   }}\n\
         }}\n\
         Respond with ONLY the JSON object."
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
