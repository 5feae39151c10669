// LLM prompt templates for industry insights.

/// Low temperature: insight numbers should be stable between runs.
pub const INSIGHTS_TEMPERATURE: f64 = 0.4;

pub const INSIGHTS_SYSTEM: &str = "You are an expert labor market analyst. \
    Always respond with STRICT, valid JSON that matches the requested schema.";

/// Replace: {industry}, {json_only}
pub const INSIGHTS_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry and provide insights in ONLY the following JSON format without any additional notes or explanations:
{
  "salaryRanges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "string" }
  ],
  "growthRate": number,
  "demandLevel": "HIGH" | "MEDIUM" | "LOW",
  "topSkills": ["skill1", "skill2"],
  "marketOutlook": "POSITIVE" | "NEUTRAL" | "NEGATIVE",
  "keyTrends": ["trend1", "trend2"],
  "recommendedSkills": ["skill1", "skill2"]
}

IMPORTANT:
- {json_only}
- Include at least 5 common roles for salary ranges.
- Growth rate should be a percentage number (not a string with %).
- Include at least 5 skills and 5 trends."#;
