// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic scoring engine for a résumé's professional-skills section.
//!
//! Scores four dimensions (count, depth, breadth, experience match) from a
//! graduation year and a skill list, producing a bounded 5.0–10.0 score and
//! a textual suggestion. Pure and synchronous: identical inputs always
//! produce identical outputs, and no I/O happens anywhere in this module.
//!
//! All keyword lists come from [`ScoringConfig`]; the defaults carry the
//! production Chinese-locale data.

use intervu_config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Separator for concatenated suggestion fragments.
const SUGGESTION_SEPARATOR: &str = "；";

/// Result of evaluating a skills section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEvaluation {
    /// Overall score, 5.0–10.0 inclusive, one decimal place.
    pub score: f64,
    /// Natural-language improvement suggestion.
    pub suggestion: String,
    pub details: SkillEvaluationDetails,
}

/// Supporting details behind a [`SkillEvaluation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEvaluationDetails {
    pub years_of_experience: u32,
    pub skill_count: usize,
    pub covered_domains: Vec<String>,
    pub has_advanced_skills: bool,
}

/// Depth analysis over a skill list.
#[derive(Debug, Clone)]
struct DepthAnalysis {
    score: f64,
    has_advanced_skills: bool,
    advanced_skills: Vec<String>,
}

/// Breadth analysis over a skill list.
#[derive(Debug, Clone)]
struct BreadthAnalysis {
    score: f64,
    covered_domains: Vec<String>,
}

/// Experience-match analysis over years of experience and the skill list.
#[derive(Debug, Clone)]
struct MatchAnalysis {
    score: f64,
    feedback: String,
}

/// Evaluates a skills section.
///
/// `current_year` is passed explicitly so the function stays pure; callers
/// wanting wall-clock behavior pass `chrono::Utc::now().year()`.
///
/// An empty skill list short-circuits to the floor score of 5.0 — there is
/// nothing to grade, only suggestions to make.
pub fn evaluate_skills(
    graduation_year: i32,
    skills: &[String],
    config: &ScoringConfig,
    current_year: i32,
) -> SkillEvaluation {
    let years_of_experience = (current_year - graduation_year).max(0) as u32;

    let depth = analyze_depth(skills, config);
    let breadth = analyze_breadth(skills, config);
    let experience_match = check_experience_match(years_of_experience, skills.len(), &depth);

    let score = if skills.is_empty() {
        5.0
    } else {
        let base = base_score(years_of_experience, skills.len());
        let raw = 5.0 + base + depth.score + breadth.score + experience_match.score;
        ((raw * 10.0).round() / 10.0).clamp(5.0, 10.0)
    };

    let suggestion = build_suggestion(
        years_of_experience,
        skills,
        config,
        &depth,
        &breadth,
        &experience_match,
    );

    SkillEvaluation {
        score,
        suggestion,
        details: SkillEvaluationDetails {
            years_of_experience,
            skill_count: skills.len(),
            covered_domains: breadth.covered_domains,
            has_advanced_skills: depth.has_advanced_skills,
        },
    }
}

/// Skill-count score (0–2.5) against an experience-scaled expectation.
///
/// Expected count grows two skills per year from a base of five, capped at
/// eighteen. The ratio is allowed to overshoot to 1.5 before the 2.5 cap.
fn base_score(years_of_experience: u32, skill_count: usize) -> f64 {
    let expected = (5.0 + f64::from(years_of_experience) * 2.0).min(18.0);
    let ratio = (skill_count as f64 / expected).min(1.5);
    (ratio * 2.5).min(2.5)
}

/// Depth score (0–2.5) from advanced and proficiency keyword matches.
fn analyze_depth(skills: &[String], config: &ScoringConfig) -> DepthAnalysis {
    let mut advanced_count = 0usize;
    let mut proficient_count = 0usize;
    let mut advanced_skills = Vec::new();

    for skill in skills {
        let has_advanced = config
            .advanced_keywords
            .iter()
            .any(|kw| skill.contains(kw.as_str()));
        let has_proficient = config
            .proficient_keywords
            .iter()
            .any(|kw| skill.contains(kw.as_str()));

        if has_advanced {
            advanced_count += 1;
            advanced_skills.push(skill.clone());
        }
        if has_proficient {
            proficient_count += 1;
        }
    }

    let (advanced_ratio, proficient_ratio) = if skills.is_empty() {
        (0.0, 0.0)
    } else {
        (
            advanced_count as f64 / skills.len() as f64,
            proficient_count as f64 / skills.len() as f64,
        )
    };

    DepthAnalysis {
        score: (advanced_ratio * 3.0 + proficient_ratio * 1.5).min(2.5),
        has_advanced_skills: advanced_count > 0,
        advanced_skills,
    }
}

/// Breadth score (0–2.5): 0.5 per covered technology domain.
///
/// Domain matching is case-insensitive substring search over the whole
/// space-joined skill list, so multi-word keywords like "React Native" can
/// span adjacent skills the way the production heuristic does.
fn analyze_breadth(skills: &[String], config: &ScoringConfig) -> BreadthAnalysis {
    let joined = skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let covered_domains: Vec<String> = config
        .domains
        .iter()
        .filter(|domain| {
            domain
                .keywords
                .iter()
                .any(|kw| joined.contains(&kw.to_lowercase()))
        })
        .map(|domain| domain.name.clone())
        .collect();

    BreadthAnalysis {
        score: (covered_domains.len() as f64 * 0.5).min(2.5),
        covered_domains,
    }
}

/// Experience-match score (0–2.5) with band-specific feedback.
fn check_experience_match(
    years_of_experience: u32,
    skill_count: usize,
    depth: &DepthAnalysis,
) -> MatchAnalysis {
    let has_advanced = depth.has_advanced_skills;

    let (score, feedback) = if years_of_experience <= 1 {
        // New grad / first year: 5-10 skills, no depth requirement.
        if skill_count < 3 {
            (1.5, "技能数量偏少，建议补充基础技能")
        } else if skill_count > 15 {
            (2.0, "技能数量过多，建议精简，突出核心技能")
        } else {
            (2.5, "")
        }
    } else if years_of_experience <= 3 {
        // 1-3 years: 8-15 skills, some proficiency expected.
        if skill_count < 5 {
            (1.5, "技能数量与工作年限不匹配，建议补充")
        } else if !has_advanced && skill_count < 10 {
            (2.0, "建议突出 1-2 个深入掌握的技能")
        } else {
            (2.5, "")
        }
    } else if years_of_experience <= 5 {
        // 3-5 years: clear technical depth expected.
        if !has_advanced {
            (1.5, "工作 3 年以上应体现技术深度，建议补充精通/深入的技能描述")
        } else {
            (2.5, "")
        }
    } else if !has_advanced {
        // 5+ years: a specialty plus breadth expected.
        (1.0, "资深工程师应有明确的技术专长，建议突出核心竞争力")
    } else if depth.advanced_skills.len() < 2 {
        (2.0, "建议增加更多深度技能，体现技术积累")
    } else {
        (2.5, "")
    };

    MatchAnalysis {
        score,
        feedback: feedback.to_string(),
    }
}

/// Concatenates the applicable suggestion fragments, or the "looks good"
/// message when none apply.
fn build_suggestion(
    years_of_experience: u32,
    skills: &[String],
    config: &ScoringConfig,
    depth: &DepthAnalysis,
    breadth: &BreadthAnalysis,
    experience_match: &MatchAnalysis,
) -> String {
    let mut suggestions: Vec<String> = Vec::new();

    if !experience_match.feedback.is_empty() {
        suggestions.push(experience_match.feedback.clone());
    }

    if !depth.has_advanced_skills && years_of_experience >= 2 {
        suggestions.push("建议使用熟悉、熟练、精通等词描述技能掌握程度".to_string());
    }

    if breadth.covered_domains.len() < 2 {
        suggestions.push("技能领域覆盖较窄，可考虑补充相关领域技能（如数据库、运维等）".to_string());
    }

    if skills.len() < 5 {
        suggestions.push("技能数量偏少，建议补充到 8-12 个核心技能".to_string());
    } else if skills.len() > 20 {
        suggestions.push("技能数量过多，建议精简到 12-15 个，突出核心竞争力".to_string());
    }

    if skills
        .iter()
        .any(|s| s.contains(config.aware_qualifier.as_str()))
    {
        suggestions.push("不建议写了解xx技术，要么写熟悉，要么不写".to_string());
    }

    if suggestions.is_empty() {
        return "技能部分整体良好，与工作经验匹配".to_string();
    }

    suggestions.join(SUGGESTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const YEAR: i32 = 2026;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_skill_list_scores_exactly_the_floor() {
        let result = evaluate_skills(YEAR, &[], &config(), YEAR);
        assert_eq!(result.score, 5.0);
        assert_eq!(result.details.skill_count, 0);
        assert!(result.details.covered_domains.is_empty());
        assert!(!result.details.has_advanced_skills);
        assert!(!result.suggestion.is_empty());
    }

    #[test]
    fn senior_with_single_advanced_skill_gets_depth_feedback() {
        // Six years out, one advanced skill: the >5y band with
        // advanced_skills.len() < 2 applies.
        let result = evaluate_skills(
            YEAR - 6,
            &skills(&["熟悉 React", "精通 Node.js 性能优化", "熟练 MySQL"]),
            &config(),
            YEAR,
        );
        assert!(result.details.has_advanced_skills);
        assert!(result.suggestion.contains("建议增加更多深度技能，体现技术积累"));
        assert!(result.score >= 5.0 && result.score <= 10.0);
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let list = skills(&["熟悉 React", "了解 Docker", "熟练 TypeScript"]);
        let a = evaluate_skills(2020, &list, &config(), YEAR);
        let b = evaluate_skills(2020, &list, &config(), YEAR);
        assert_eq!(a, b);
    }

    #[test]
    fn future_graduation_year_clamps_to_zero_experience() {
        let result = evaluate_skills(YEAR + 3, &skills(&["熟悉 React"]), &config(), YEAR);
        assert_eq!(result.details.years_of_experience, 0);
    }

    #[test]
    fn new_grad_with_few_skills_flagged() {
        let result = evaluate_skills(YEAR, &skills(&["HTML", "CSS"]), &config(), YEAR);
        assert!(result.suggestion.contains("技能数量偏少，建议补充基础技能"));
    }

    #[test]
    fn new_grad_with_too_many_skills_flagged() {
        let many: Vec<String> = (0..16).map(|i| format!("熟悉 技能{i}")).collect();
        let result = evaluate_skills(YEAR, &many, &config(), YEAR);
        assert!(result.suggestion.contains("技能数量过多，建议精简，突出核心技能"));
    }

    #[test]
    fn mid_level_without_depth_gets_depth_hint() {
        // Four years out, no advanced keywords anywhere.
        let result = evaluate_skills(
            YEAR - 4,
            &skills(&["熟悉 React", "熟悉 Vue", "熟练 CSS", "掌握 Git", "熟悉 MySQL"]),
            &config(),
            YEAR,
        );
        assert!(!result.details.has_advanced_skills);
        assert!(result.suggestion.contains("工作 3 年以上应体现技术深度"));
        // The word-choice hint also fires: two or more years, no advanced skill.
        assert!(result.suggestion.contains("熟悉、熟练、精通"));
    }

    #[test]
    fn senior_without_any_advanced_skill_scores_lowest_band() {
        let result = evaluate_skills(
            YEAR - 8,
            &skills(&["熟悉 React", "熟悉 Vue", "熟悉 Node", "熟悉 MySQL", "熟悉 Git"]),
            &config(),
            YEAR,
        );
        assert!(result.suggestion.contains("资深工程师应有明确的技术专长"));
    }

    #[test]
    fn aware_qualifier_triggers_format_hint() {
        let result = evaluate_skills(
            YEAR - 1,
            &skills(&["熟悉 React", "了解 Kafka", "熟练 CSS"]),
            &config(),
            YEAR,
        );
        assert!(result.suggestion.contains("不建议写了解xx技术"));
    }

    #[test]
    fn narrow_domain_coverage_triggers_breadth_hint() {
        let result = evaluate_skills(
            YEAR - 1,
            &skills(&["熟悉 React", "熟悉 Vue", "熟练 CSS"]),
            &config(),
            YEAR,
        );
        assert_eq!(result.details.covered_domains, vec!["前端".to_string()]);
        assert!(result.suggestion.contains("技能领域覆盖较窄"));
    }

    #[test]
    fn well_rounded_profile_looks_good() {
        // One year out, broad coverage, enough skills, nothing to flag.
        let result = evaluate_skills(
            YEAR - 1,
            &skills(&[
                "熟悉 React",
                "熟练 TypeScript",
                "掌握 Node.js",
                "熟悉 MySQL",
                "熟悉 Docker",
                "掌握 Git",
            ]),
            &config(),
            YEAR,
        );
        assert_eq!(result.suggestion, "技能部分整体良好，与工作经验匹配");
        assert!(result.details.covered_domains.len() >= 2);
    }

    #[test]
    fn breadth_counts_distinct_domains() {
        let result = evaluate_skills(
            YEAR - 2,
            &skills(&["React", "Node", "MySQL", "Docker", "iOS", "Git"]),
            &config(),
            YEAR,
        );
        assert_eq!(result.details.covered_domains.len(), 6);
    }

    #[test]
    fn breadth_matching_is_case_insensitive() {
        let result = evaluate_skills(YEAR - 1, &skills(&["react", "mysql"]), &config(), YEAR);
        assert!(result.details.covered_domains.contains(&"前端".to_string()));
        assert!(result.details.covered_domains.contains(&"数据库".to_string()));
    }

    #[test]
    fn score_has_at_most_one_decimal_digit() {
        let result = evaluate_skills(
            YEAR - 3,
            &skills(&["熟悉 React", "精通架构", "熟练 MySQL", "掌握 Docker", "熟悉 Git"]),
            &config(),
            YEAR,
        );
        let scaled = result.score * 10.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "score {} has more than one decimal",
            result.score
        );
    }

    proptest! {
        #[test]
        fn score_always_bounded_and_one_decimal(
            graduation_year in 1970i32..2040,
            skill_list in prop::collection::vec("[a-zA-Z熟悉精通了解架构 ]{0,24}", 0..30),
        ) {
            let result = evaluate_skills(graduation_year, &skill_list, &config(), YEAR);
            prop_assert!(result.score >= 5.0);
            prop_assert!(result.score <= 10.0);
            let scaled = result.score * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}
