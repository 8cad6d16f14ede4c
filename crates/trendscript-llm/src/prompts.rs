//! Prompt templates for the three model stages.

const KEYWORD_TEMPLATE: &str = r#"
Analyze the following video idea and extract the single most important noun or short noun phrase (2-3 words max) that represents the core subject. This keyword will be used to search Google Trends.

Your response MUST be only the keyword phrase itself, in lowercase, with no explanation, punctuation, or quotation marks.

- Idea: "A fun 8s TikTok about why iced coffee is better than hot coffee"
- Your Response: iced coffee

- Idea: "Make a tutorial on how to bake sourdough bread"
- Your Response: sourdough bread

- Idea: "A review of the new Tesla Cybertruck"
- Your Response: tesla cybertruck

- Idea: "{video_idea}"
- Your Response:
"#;

const VIRAL_ANGLE_TEMPLATE: &str = r#"
You are a world-class social media strategist and viral trend analyst. Your task is to analyze a list of raw trend candidates and an original video idea, then formulate a single, concise 'Viral Angle' prompt for a scriptwriter AI.

**Original Idea:** "{original_idea}"

**Trend Candidates:**
{trend_list}

**Your Process:**
1.  **Analyze & Filter:** Review all trend candidates. You MUST DISCARD trends that are:
    - Generic or redundant (e.g., 'Coffee', 'Cup' if the topic is coffee).
    - Brand-unsafe, political, religious, or overly niche/strange.
2.  **Select for Virality:** From the safe and interesting trends, identify the 1-3 trends with the HIGHEST potential to make the video viral, engaging, and unique.
3.  **Formulate Viral Angle:** Combine the original idea with your chosen viral trends into a single, creative instruction sentence. This sentence is the final output.
4.  **Output Format:** Your final response MUST be a single JSON object containing two keys: "selected_trends" (a list of the exact trend names you chose) and "viral_angle" (the instruction sentence you formulated). Do not add any other text or markdown.

**EXAMPLE:**
- Original Idea: "Make a fun 8s TikTok about why iced coffee is better than hot coffee"
- Trend Candidates: ["Coffee", "Starbucks", "Dalgona coffee", "Autumn", "Cozy Coffee Shop"]
- Your Response:
{
    "selected_trends": ["Dalgona coffee", "Cozy Coffee Shop"],
    "viral_angle": "Create a fun 8s TikTok showing iced coffee is superior to hot coffee by contrasting a boring hot coffee with a trendy, aesthetic 'Dalgona coffee' in a 'Cozy Coffee Shop' setting."
}
"#;

const SCRIPT_TEMPLATE: &str = r#"
You are an expert short-form video scriptwriter for platforms like TikTok and Instagram Reels.
Your task is to take a specific 'Viral Angle' and turn it into a complete, ready-to-shoot script concept.

**Viral Angle / Core Instruction:**
"{viral_angle}"

**Your Output:**
- Create a short, concise script (for an 8-15 second video).
- Include scene descriptions, dialogue/VO, and suggested on-screen text/hashtags.
- The tone should be authentic, punchy, and highly shareable.
"#;

#[must_use]
pub fn keyword_prompt(video_idea: &str) -> String {
    KEYWORD_TEMPLATE.replace("{video_idea}", video_idea)
}

/// Candidates are rendered one per line as `- "<trend>"`.
#[must_use]
pub fn viral_angle_prompt(original_idea: &str, candidates: &[String]) -> String {
    let trend_list = candidates
        .iter()
        .map(|trend| format!("- \"{trend}\""))
        .collect::<Vec<_>>()
        .join("\n");

    // Substitute the list first so an idea containing "{trend_list}" stays literal.
    VIRAL_ANGLE_TEMPLATE
        .replace("{trend_list}", &trend_list)
        .replacen("{original_idea}", original_idea, 1)
}

#[must_use]
pub fn script_prompt(viral_angle: &str) -> String {
    SCRIPT_TEMPLATE.replace("{viral_angle}", viral_angle)
}
