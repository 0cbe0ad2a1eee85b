//! Prompt template for the content backend

/// Page limit assumed when a topic request does not give one
pub const DEFAULT_PAGE_LIMIT: u32 = 15;

/// Characters of text requested per page.
///
/// Lower than the governor's [`crate::governor::PAGE_BUDGET_CHARS`]; see the
/// note there.
pub const PROMPT_CHARS_PER_PAGE: u32 = 3500;

const STRUCTURE: &str = "MANDATORY STRUCTURE (Generate ALL sections):

## Introduction
### Background and Context
(Write 4 detailed paragraphs about the topic's background, importance, and context)

### Scope of the Study
(Write 3 paragraphs about what this report covers)

### Significance
(Write 3 paragraphs about why this topic matters)

## Literature Review
### Theoretical Framework
(Write 5 paragraphs about theories and frameworks)

### Historical Perspective
(Write 4 paragraphs about historical development)

### Current Research Trends
(Write 5 paragraphs about recent research)

### Research Gaps
(Write 3 paragraphs about what's missing in current research)

## Aim and Objectives
### Primary Aim
(Write 3 paragraphs)

### Specific Objectives
(Write 4 paragraphs)

### Expected Outcomes
(Write 3 paragraphs)

## Methodology
### Research Design
(Write 5 paragraphs)

### Data Collection Methods
(Write 5 paragraphs)

### Sampling Strategy
(Write 4 paragraphs)

### Data Analysis Techniques
(Write 5 paragraphs)

### Ethical Considerations
(Write 3 paragraphs)

## Results and Discussion
### Key Findings
(Write 6 paragraphs)

### Detailed Analysis
(Write 7 paragraphs)

### Comparison with Existing Literature
(Write 5 paragraphs)

### Implications
(Write 5 paragraphs)

## Conclusion
(Write 6-8 comprehensive paragraphs summarizing everything. Each paragraph should be 5-7 detailed sentences. NO subsections here. Cover: summary of findings, key insights, practical implications, limitations, future directions, and final thoughts.)

## References
1. Author, A. (Year). Title. Journal/Publisher.
(List 15-20 formatted references)

IMPORTANT: Generate the COMPLETE report with ALL sections. Do not stop after Introduction!";

/// Build the generation prompt for `topic`
///
/// `page_limit` defaults to [`DEFAULT_PAGE_LIMIT`].
pub fn build_prompt(topic: &str, page_limit: Option<u32>) -> String {
    let pages = page_limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let target_chars = pages.saturating_mul(PROMPT_CHARS_PER_PAGE);

    format!(
        "Generate a complete academic research report on: {topic}

CRITICAL INSTRUCTIONS:
- DO NOT write 'Here is the report' or any meta-text
- Start DIRECTLY with '## Introduction'
- Use '## ' for main sections and '### ' for subsections
- NO page numbers, NO [IMAGE:] markers
- Each paragraph must be 5-7 sentences
- Generate approximately {target_chars} characters

{STRUCTURE}"
    )
}
