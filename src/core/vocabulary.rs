use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building a [`SkillVocabulary`] from configuration
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Skill names must not be empty")]
    EmptySkillName,

    #[error("Duplicate skill: {0}")]
    DuplicateSkill(String),

    #[error("Aliases declared for unknown skill: {0}")]
    UnknownAliasTarget(String),

    #[error("Empty alias for skill: {0}")]
    EmptyAlias(String),

    #[error("Invalid alias pattern '{alias}': {source}")]
    InvalidAliasPattern {
        alias: String,
        #[source]
        source: regex::Error,
    },
}

/// Canonical skills of the default catalogue, in declaration order
pub const BUILTIN_SKILLS: &[&str] = &[
    // Programming languages
    "Python", "JavaScript", "Java", "C++", "C#", "Ruby", "PHP", "Go",
    "TypeScript", "Swift", "Kotlin", "Rust", "Scala", "R",
    // Web frameworks
    "React", "Angular", "Vue.js", "Flask", "Django", "Express.js",
    "Spring Boot", "ASP.NET", "Laravel", "Ruby on Rails",
    // Databases
    "MongoDB", "MySQL", "PostgreSQL", "SQLite", "Redis", "Oracle",
    "SQL Server", "Cassandra", "DynamoDB", "Firebase",
    // Cloud & DevOps
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins",
    "Git", "GitHub", "GitLab", "CI/CD", "Terraform",
    // AI/ML
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch",
    "NLP", "Computer Vision", "scikit-learn", "Keras",
    // Other
    "REST API", "GraphQL", "Microservices", "Agile", "Scrum",
    "HTML", "CSS", "Bootstrap", "Tailwind CSS", "Node.js",
];

/// Alternate spellings of the default catalogue, keyed by canonical name
pub const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("JavaScript", &["js", "javascript", "java script", "ecmascript"]),
    ("Node.js", &["nodejs", "node.js", "node js", "expressjs", "express.js"]),
    ("React", &["react", "reactjs", "react.js", "react native"]),
    ("Python", &["python", "python3", "python 3"]),
    ("C++", &["c++", "cpp", "c plus plus"]),
    ("C#", &["c#", "csharp", "c sharp"]),
    ("PostgreSQL", &["postgres"]),
    ("Kubernetes", &["k8s"]),
    ("Go", &["golang"]),
    ("Vue.js", &["vuejs", "vue js"]),
    ("MongoDB", &["mongo"]),
    ("scikit-learn", &["sklearn"]),
    ("Tailwind CSS", &["tailwindcss"]),
];

/// One alias of a canonical skill together with its boundary-safe matcher
#[derive(Debug, Clone)]
pub(crate) struct AliasPattern {
    pub(crate) alias: String,
    pub(crate) pattern: Regex,
}

impl AliasPattern {
    fn compile(alias: &str) -> Result<Self, VocabularyError> {
        // `\b` cannot bound aliases that end in a symbol ("c++", "c#"), so the
        // neighbouring characters are checked explicitly instead.
        let source = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(alias));
        let pattern = Regex::new(&source).map_err(|source| VocabularyError::InvalidAliasPattern {
            alias: alias.to_string(),
            source,
        })?;

        Ok(Self {
            alias: alias.to_string(),
            pattern,
        })
    }
}

/// Immutable catalogue of canonical skills and their aliases
///
/// Built once at startup and shared by reference (usually behind an `Arc`).
/// Lookups are case-insensitive; the stored casing of each canonical skill is
/// the one returned to callers.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    index: HashMap<String, usize>,
    aliases: HashMap<usize, Vec<AliasPattern>>,
}

impl SkillVocabulary {
    /// Build a vocabulary from an ordered skill list and an alias table
    pub fn new<S, A, L>(skills: S, aliases: A) -> Result<Self, VocabularyError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        A: IntoIterator<Item = (String, L)>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();

        for skill in skills {
            let name = skill.as_ref().trim();
            if name.is_empty() {
                return Err(VocabularyError::EmptySkillName);
            }
            if index.insert(name.to_lowercase(), names.len()).is_some() {
                return Err(VocabularyError::DuplicateSkill(name.to_string()));
            }
            names.push(name.to_string());
        }

        let mut alias_table: HashMap<usize, Vec<AliasPattern>> = HashMap::new();
        for (skill, list) in aliases {
            let position = *index
                .get(&skill.trim().to_lowercase())
                .ok_or_else(|| VocabularyError::UnknownAliasTarget(skill.clone()))?;

            let patterns = alias_table.entry(position).or_default();
            for alias in list {
                let alias = alias.as_ref().trim().to_lowercase();
                if alias.is_empty() {
                    return Err(VocabularyError::EmptyAlias(skill.clone()));
                }
                if patterns.iter().any(|p| p.alias == alias) {
                    continue;
                }
                patterns.push(AliasPattern::compile(&alias)?);
            }
        }

        Ok(Self {
            skills: names,
            index,
            aliases: alias_table,
        })
    }

    /// The default catalogue
    pub fn builtin() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(skill, list)| (skill.to_string(), list.iter().copied()));

        // The builtin tables are constants covered by tests.
        Self::new(BUILTIN_SKILLS.iter().copied(), aliases)
            .expect("builtin skill vocabulary is valid")
    }

    /// Case-insensitive exact lookup of a canonical skill
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.index
            .get(&token.to_lowercase())
            .map(|&i| self.skills[i].as_str())
    }

    /// Aliases declared for a skill, lowercased, in declaration order
    pub fn aliases_of(&self, skill: &str) -> Vec<&str> {
        self.index
            .get(&skill.to_lowercase())
            .and_then(|i| self.aliases.get(i))
            .map(|patterns| patterns.iter().map(|p| p.alias.as_str()).collect())
            .unwrap_or_default()
    }

    /// All canonical skills in declaration order
    pub fn all_skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Canonical skills that have aliases, each paired with its compiled
    /// alias matchers, in declaration order
    pub(crate) fn alias_patterns(&self) -> impl Iterator<Item = (&str, &[AliasPattern])> + '_ {
        self.skills.iter().enumerate().filter_map(move |(i, skill)| {
            self.aliases
                .get(&i)
                .map(|patterns| (skill.as_str(), patterns.as_slice()))
        })
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
