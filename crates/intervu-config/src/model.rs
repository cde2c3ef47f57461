// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Intervu pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at load time. The résumé-detection heuristic and the scoring
//! keyword lists are configuration data, not hard-coded logic: the defaults
//! reproduce the production values, but deployments can replace them without
//! touching the scoring engine.

use serde::{Deserialize, Serialize};

/// Top-level Intervu configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntervuConfig {
    /// Model alias and generation policy settings.
    #[serde(default)]
    pub models: ModelsConfig,

    /// Résumé-content detection heuristic for the resume-optimization agent.
    #[serde(default)]
    pub resume: ResumeHeuristicConfig,

    /// Keyword lists for the skill-evaluation scoring tool.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Model catalog cache settings for usage enrichment.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Capability tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Model alias and generation policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    /// Default chat model alias.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Reasoning model alias. Agents bind zero tools to this variant.
    #[serde(default = "default_reasoning_model")]
    pub reasoning_model: String,

    /// Maximum reasoning/tool-call steps per turn before a final answer is
    /// forced.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            chat_model: default_chat_model(),
            reasoning_model: default_reasoning_model(),
            max_steps: default_max_steps(),
        }
    }
}

fn default_chat_model() -> String {
    "chat-model".to_string()
}

fn default_reasoning_model() -> String {
    "chat-model-reasoning".to_string()
}

fn default_max_steps() -> u32 {
    5
}

/// Heuristic for deciding whether prior user messages already contain résumé
/// content: either a message longer than `min_chars` or one matching any of
/// `keywords`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeHeuristicConfig {
    #[serde(default = "default_resume_min_chars")]
    pub min_chars: usize,

    #[serde(default = "default_resume_keywords")]
    pub keywords: Vec<String>,
}

impl Default for ResumeHeuristicConfig {
    fn default() -> Self {
        Self {
            min_chars: default_resume_min_chars(),
            keywords: default_resume_keywords(),
        }
    }
}

fn default_resume_min_chars() -> usize {
    200
}

fn default_resume_keywords() -> Vec<String> {
    ["简历", "工作经验", "项目经验", "技术栈", "教育背景"]
        .map(String::from)
        .to_vec()
}

/// A named technology domain with its matching keywords.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DomainKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Keyword lists driving the skill-evaluation scoring tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Keywords indicating an advanced/deep skill description.
    #[serde(default = "default_advanced_keywords")]
    pub advanced_keywords: Vec<String>,

    /// Keywords indicating a stated proficiency level.
    #[serde(default = "default_proficient_keywords")]
    pub proficient_keywords: Vec<String>,

    /// Qualifier that marks a skill as "merely aware of" (discouraged).
    #[serde(default = "default_aware_qualifier")]
    pub aware_qualifier: String,

    /// Technology domains used for the breadth score, in report order.
    #[serde(default = "default_domains")]
    pub domains: Vec<DomainKeywords>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            advanced_keywords: default_advanced_keywords(),
            proficient_keywords: default_proficient_keywords(),
            aware_qualifier: default_aware_qualifier(),
            domains: default_domains(),
        }
    }
}

fn default_advanced_keywords() -> Vec<String> {
    [
        "精通",
        "深入",
        "架构",
        "性能优化",
        "源码",
        "底层",
        "原理",
        "设计模式",
        "微服务",
        "分布式",
        "高并发",
        "大数据",
        "机器学习",
        "AI",
        "算法",
        "安全",
        "DevOps",
        "CI/CD",
        "容器化",
        "K8s",
        "Kubernetes",
    ]
    .map(String::from)
    .to_vec()
}

fn default_proficient_keywords() -> Vec<String> {
    ["熟悉", "熟练", "掌握"].map(String::from).to_vec()
}

fn default_aware_qualifier() -> String {
    "了解".to_string()
}

fn default_domains() -> Vec<DomainKeywords> {
    let domain = |name: &str, keywords: &[&str]| DomainKeywords {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    };

    vec![
        domain(
            "前端",
            &[
                "React",
                "Vue",
                "Angular",
                "HTML",
                "CSS",
                "JavaScript",
                "TypeScript",
                "小程序",
                "Webpack",
                "Vite",
                "Next",
                "Nuxt",
            ],
        ),
        domain(
            "后端",
            &[
                "Node", "Java", "Python", "Go", "PHP", "Spring", "Django", "Express", "Nest",
                "Koa",
            ],
        ),
        domain(
            "数据库",
            &[
                "MySQL",
                "PostgreSQL",
                "MongoDB",
                "Redis",
                "Oracle",
                "SQL",
                "数据库",
            ],
        ),
        domain(
            "移动端",
            &[
                "iOS",
                "Android",
                "Flutter",
                "React Native",
                "Swift",
                "Kotlin",
                "App",
            ],
        ),
        domain(
            "运维/云",
            &[
                "Linux",
                "Docker",
                "K8s",
                "Kubernetes",
                "AWS",
                "阿里云",
                "腾讯云",
                "CI/CD",
                "Jenkins",
                "Nginx",
            ],
        ),
        domain(
            "工具/其他",
            &["Git", "测试", "敏捷", "Scrum", "产品", "项目管理"],
        ),
    ]
}

/// Model catalog cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// URL of the external pricing/context catalog document.
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Catalog refresh window in seconds.
    #[serde(default = "default_catalog_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            ttl_secs: default_catalog_ttl_secs(),
        }
    }
}

fn default_catalog_url() -> String {
    "https://models.dev/api.json".to_string()
}

fn default_catalog_ttl_secs() -> u64 {
    24 * 60 * 60
}

/// Capability tool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Source document for the behavioural-questions tool.
    #[serde(default = "default_behavioural_questions_url")]
    pub behavioural_questions_url: String,

    /// Base URL of the weather lookup API.
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            behavioural_questions_url: default_behavioural_questions_url(),
            weather_api_url: default_weather_api_url(),
        }
    }
}

fn default_behavioural_questions_url() -> String {
    "https://raw.githubusercontent.com/mianshipai/mianshipai-web/refs/heads/main/docs/hr-exam/behavioural-test.md"
        .to_string()
}

fn default_weather_api_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}
