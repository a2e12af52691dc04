use serde::{Deserialize, Serialize};

/// 首頁內容文件 (content.json)。缺漏欄位在反序列化時以預設值補齊，
/// 儲存時整份重寫。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub projects: ProjectsSection,
    pub skills: SkillsSection,
    pub contact: ContactSection,
    pub footer: FooterSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub title: HeroTitle,
    pub description: String,
    pub cta: HeroCta,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroTitle {
    pub part1: String,
    pub part2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroCta {
    pub primary: CtaButton,
    pub secondary: CtaButton,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub title: String,
    pub name: String,
    pub subtitle: String,
    pub content: String,
    pub image: String,
    pub education: String,
    pub location: String,
    pub interests: String,
    pub experience: String,
    pub icon_styles: IconStyles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconStyles {
    pub background_color: String,
    pub background_opacity: u8,
    pub icon_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsSection {
    pub tag_styles: TagStyles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagStyles {
    pub background_color: String,
    pub background_opacity: u8,
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsSection {
    pub title: String,
    pub skill_categories: Vec<SkillCategory>,
    pub technical_proficiencies: TechnicalProficiencies,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalProficiencies {
    pub title: String,
    pub categories: Vec<ProficiencyGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProficiencyGroup {
    pub name: String,
    pub icon: String,
    pub skills: Vec<SkillLevel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillLevel {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub contact_items: Vec<ContactItem>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactItem {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSection {
    pub title: String,
    pub subtitle: String,
    pub social: FooterSocial,
    pub bottom_links: Vec<FooterLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSocial {
    pub linkedin: String,
    pub github: String,
    pub instagram: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// 專案清單文件 (projects.json),外層固定包一層 `projects` 陣列。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// 新增專案的請求內容。沒有 id 欄位:id 一律由伺服器配發,
/// 用戶端就算送了也會被忽略。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
}

impl ProjectDraft {
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            tags: self.tags,
            link: self.link,
        }
    }
}

/// 主題文件 (theme.json):色票、字型與 Font Awesome 圖示類別。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub icons: ThemeIcons,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeIcons {
    pub arrow: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

// 以下 Default 實作即是出廠文案,同時供種子寫入與缺漏欄位補齊使用。

const PORTRAIT_IMAGE: &str = "https://images.unsplash.com/photo-1581094794329-c8112a89af12?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80";

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: HeroTitle::default(),
            description: "Hi, I'm Sandhya Thapa, a passionate civil engineering student \
                          dedicated to creating sustainable and innovative infrastructure \
                          solutions."
                .to_string(),
            cta: HeroCta::default(),
            image: PORTRAIT_IMAGE.to_string(),
        }
    }
}

impl Default for HeroTitle {
    fn default() -> Self {
        Self {
            part1: "Building Dreams,".to_string(),
            part2: "Fyi with eyes closed 24/7".to_string(),
        }
    }
}

impl Default for HeroCta {
    fn default() -> Self {
        Self {
            primary: CtaButton {
                text: "View My Work".to_string(),
                link: "#projects".to_string(),
            },
            secondary: CtaButton {
                text: "Contact Me".to_string(),
                link: "#contact".to_string(),
            },
        }
    }
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            title: "About Me".to_string(),
            name: "Sandhya Thapa".to_string(),
            subtitle: "Civil Engineering Student | Sustainable Design Enthusiast".to_string(),
            content: "I'm currently pursuing my Bachelor's degree in Civil Engineering at \
                      Pokhara University, with a passion for sustainable infrastructure and \
                      innovative design solutions.\n\nMy journey in civil engineering began \
                      when I was fascinated by the blend of creativity and technical precision \
                      required to shape our built environment. I believe in designing \
                      structures that not only stand the test of time but also harmonize with \
                      nature and serve communities effectively."
                .to_string(),
            image: PORTRAIT_IMAGE.to_string(),
            education: "Pokhara University".to_string(),
            location: "Pokhara, kaski".to_string(),
            interests: "Sustainable Design".to_string(),
            experience: "0+ Years".to_string(),
            icon_styles: IconStyles::default(),
        }
    }
}

impl Default for IconStyles {
    fn default() -> Self {
        Self {
            background_color: "var(--color-primary)".to_string(),
            background_opacity: 10,
            icon_color: "var(--color-primary)".to_string(),
        }
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        Self {
            background_color: "var(--color-primary)".to_string(),
            background_opacity: 10,
            text_color: "var(--color-primary)".to_string(),
        }
    }
}

impl Default for SkillsSection {
    fn default() -> Self {
        Self {
            title: "My Skills".to_string(),
            skill_categories: vec![
                SkillCategory {
                    name: "Structural Design".to_string(),
                    icon: "fas fa-drafting-compass".to_string(),
                    color: "var(--color-primary)".to_string(),
                },
                SkillCategory {
                    name: "Sustainable Design".to_string(),
                    icon: "fas fa-leaf".to_string(),
                    color: "var(--color-primary)".to_string(),
                },
                SkillCategory {
                    name: "3D Modeling".to_string(),
                    icon: "fas fa-cube".to_string(),
                    color: "var(--color-primary)".to_string(),
                },
                SkillCategory {
                    name: "Structural Analysis".to_string(),
                    icon: "fas fa-chart-line".to_string(),
                    color: "var(--color-primary)".to_string(),
                },
            ],
            technical_proficiencies: TechnicalProficiencies::default(),
        }
    }
}

impl Default for TechnicalProficiencies {
    fn default() -> Self {
        Self {
            title: "Technical Proficiencies".to_string(),
            categories: vec![
                ProficiencyGroup {
                    name: "Design Software".to_string(),
                    icon: "fas fa-cog".to_string(),
                    skills: vec![
                        SkillLevel {
                            name: "AutoCAD".to_string(),
                            percentage: 90,
                        },
                        SkillLevel {
                            name: "Revit".to_string(),
                            percentage: 85,
                        },
                        SkillLevel {
                            name: "SketchUp".to_string(),
                            percentage: 80,
                        },
                    ],
                },
                ProficiencyGroup {
                    name: "Analysis Tools".to_string(),
                    icon: "fas fa-calculator".to_string(),
                    skills: vec![
                        SkillLevel {
                            name: "ETABS".to_string(),
                            percentage: 75,
                        },
                        SkillLevel {
                            name: "SAP2000".to_string(),
                            percentage: 70,
                        },
                        SkillLevel {
                            name: "STAAD.Pro".to_string(),
                            percentage: 65,
                        },
                    ],
                },
            ],
        }
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            title: "Get In Touch".to_string(),
            subtitle: "Let's Build Something Together".to_string(),
            description: "Whether you have a project in mind or just want to chat about civil \
                          engineering, I'd love to hear from you!"
                .to_string(),
            email: "sandhuthapa77@gmail.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            location: "Pokhara, kaski".to_string(),
            contact_items: vec![
                ContactItem {
                    icon: "fas fa-envelope".to_string(),
                    label: "Email".to_string(),
                    value: "sandhuthapa77@gmail.com".to_string(),
                },
                ContactItem {
                    icon: "fas fa-phone-alt".to_string(),
                    label: "Phone".to_string(),
                    value: "(123) 456-7890".to_string(),
                },
                ContactItem {
                    icon: "fas fa-map-marker-alt".to_string(),
                    label: "Location".to_string(),
                    value: "Pokhara, kaski".to_string(),
                },
            ],
            social_links: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    icon: "fab fa-linkedin-in".to_string(),
                    url: "#".to_string(),
                    color: "#0077b5".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    icon: "fab fa-github".to_string(),
                    url: "#".to_string(),
                    color: "#333333".to_string(),
                },
                SocialLink {
                    name: "Instagram".to_string(),
                    icon: "fab fa-instagram".to_string(),
                    url: "#".to_string(),
                    color: "#e4405f".to_string(),
                },
            ],
        }
    }
}

impl Default for FooterSection {
    fn default() -> Self {
        Self {
            title: "Sandhya Thapa".to_string(),
            subtitle: "Civil Engineering Student".to_string(),
            social: FooterSocial::default(),
            bottom_links: vec![
                FooterLink {
                    label: "Privacy Policy".to_string(),
                    url: "#".to_string(),
                },
                FooterLink {
                    label: "Terms of Service".to_string(),
                    url: "#".to_string(),
                },
                FooterLink {
                    label: "Sitemap".to_string(),
                    url: "#".to_string(),
                },
            ],
            copyright: "© 2025 Sandhya Thapa. All rights reserved.".to_string(),
        }
    }
}

impl Default for FooterSocial {
    fn default() -> Self {
        Self {
            linkedin: "#".to_string(),
            github: "#".to_string(),
            instagram: "#".to_string(),
            twitter: "#".to_string(),
        }
    }
}

impl Default for ProjectList {
    fn default() -> Self {
        Self {
            projects: vec![
                Project {
                    id: 1,
                    title: "Sustainable Housing Complex".to_string(),
                    description: "Designed a net-zero energy residential complex incorporating \
                                  passive solar design and rainwater harvesting systems."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80".to_string(),
                    tags: vec![
                        "Sustainable Design".to_string(),
                        "Structural Analysis".to_string(),
                        "AutoCAD".to_string(),
                    ],
                    link: "#".to_string(),
                },
                Project {
                    id: 2,
                    title: "Pedestrian Suspension Bridge".to_string(),
                    description: "Developed a lightweight suspension bridge design connecting \
                                  two university campuses over a river."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80".to_string(),
                    tags: vec![
                        "Bridge Design".to_string(),
                        "Structural Analysis".to_string(),
                        "Revit".to_string(),
                    ],
                    link: "#".to_string(),
                },
                Project {
                    id: 3,
                    title: "Urban Green Space Design".to_string(),
                    description: "Created a sustainable urban park design with permeable paving \
                                  and native plant landscaping."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80".to_string(),
                    tags: vec![
                        "Landscape Design".to_string(),
                        "Sustainability".to_string(),
                        "SketchUp".to_string(),
                    ],
                    link: "#".to_string(),
                },
            ],
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#7c3aed".to_string(),
            secondary: "#4f46e5".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            accent: "#3b82f6".to_string(),
        }
    }
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Poppins".to_string(),
            body: "Inter".to_string(),
        }
    }
}

impl Default for ThemeIcons {
    fn default() -> Self {
        Self {
            arrow: "fas fa-arrow-right".to_string(),
            email: "fas fa-envelope".to_string(),
            phone: "fas fa-phone-alt".to_string(),
            location: "fas fa-map-marker-alt".to_string(),
            github: "fab fa-github".to_string(),
            linkedin: "fab fa-linkedin-in".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(SiteContent::default()).unwrap();

        assert!(value["projects"]["tagStyles"]["backgroundColor"].is_string());
        assert!(value["about"]["iconStyles"]["backgroundOpacity"].is_number());
        assert!(value["skills"]["skillCategories"].is_array());
        assert!(value["skills"]["technicalProficiencies"]["categories"].is_array());
        assert!(value["contact"]["contactItems"].is_array());
        assert!(value["footer"]["bottomLinks"].is_array());
    }

    #[test]
    fn test_partial_content_fills_missing_sections() {
        let partial = r#"{"hero":{"description":"short"}}"#;
        let content: SiteContent = serde_json::from_str(partial).unwrap();

        assert_eq!(content.hero.description, "short");
        // 未提供的部分回到出廠值
        assert_eq!(content.about.name, "Sandhya Thapa");
        assert_eq!(content.skills.skill_categories.len(), 4);
    }

    #[test]
    fn test_partial_skill_category_fills_missing_fields() {
        let category: SkillCategory = serde_json::from_str(r#"{"name":"Surveying"}"#).unwrap();

        assert_eq!(category.name, "Surveying");
        assert_eq!(category.icon, "");
        assert_eq!(category.color, "");
    }

    #[test]
    fn test_partial_skills_section_keeps_listed_categories() {
        let partial = r#"{"skills":{"skillCategories":[{"name":"CAD"}]}}"#;
        let content: SiteContent = serde_json::from_str(partial).unwrap();

        assert_eq!(content.skills.skill_categories.len(), 1);
        assert_eq!(content.skills.skill_categories[0].name, "CAD");
        // 技能區其餘欄位仍補上出廠值
        assert_eq!(content.skills.title, "My Skills");
        assert!(!content.skills.technical_proficiencies.categories.is_empty());
    }

    #[test]
    fn test_default_projects_have_sequential_ids() {
        let list = ProjectList::default();
        let ids: Vec<i64> = list.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_project_draft_ignores_client_supplied_id() {
        let body = r#"{"id":99,"title":"New","tags":["a"]}"#;
        let draft: ProjectDraft = serde_json::from_str(body).unwrap();
        let project = draft.into_project(4);

        assert_eq!(project.id, 4);
        assert_eq!(project.title, "New");
        assert_eq!(project.tags, vec!["a"]);
    }

    #[test]
    fn test_theme_default_matches_site_palette() {
        let theme = Theme::default();
        assert_eq!(theme.colors.primary, "#7c3aed");
        assert_eq!(theme.colors.accent, "#3b82f6");
        assert_eq!(theme.icons.github, "fab fa-github");
    }
}
