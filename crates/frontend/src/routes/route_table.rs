//! Таблица маршрутов приложения: путь ↔ страница ↔ модуль бокового меню.

/// Страница приложения, определяемая путём в адресной строке
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`: конфигуратор BOM-кода
    Home,
    ProductBoms { product: String },
    ProductOverview { product: String },
    /// `/product/:id/boms/:bom`: расшифровка сохранённого кода
    BomDetail { product: String, bom: String },
    ProductDetail { product: String },
    ManualReview,
    ManualDetail,
    PromptPlaybook,
    Admin,
    PosterEditor,
    NotFound { path: String },
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                urlencoding::decode(s)
                    .map(|d| d.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            })
            .collect();
        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

        match parts.as_slice() {
            [] => AppRoute::Home,
            ["product", product] => AppRoute::ProductDetail {
                product: product.to_string(),
            },
            ["product", product, "boms"] => AppRoute::ProductBoms {
                product: product.to_string(),
            },
            ["product", product, "overview"] => AppRoute::ProductOverview {
                product: product.to_string(),
            },
            ["product", product, "boms", bom] => AppRoute::BomDetail {
                product: product.to_string(),
                bom: bom.to_string(),
            },
            ["manual", "review"] => AppRoute::ManualReview,
            ["manual", "manual-detail"] => AppRoute::ManualDetail,
            ["prompt-playbook"] => AppRoute::PromptPlaybook,
            ["admin"] => AppRoute::Admin,
            ["poster-editor"] => AppRoute::PosterEditor,
            _ => AppRoute::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn to_path(&self) -> String {
        let seg = |s: &str| urlencoding::encode(s).into_owned();
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::ProductBoms { product } => format!("/product/{}/boms", seg(product)),
            AppRoute::ProductOverview { product } => format!("/product/{}/overview", seg(product)),
            AppRoute::BomDetail { product, bom } => {
                format!("/product/{}/boms/{}", seg(product), seg(bom))
            }
            AppRoute::ProductDetail { product } => format!("/product/{}", seg(product)),
            AppRoute::ManualReview => "/manual/review".to_string(),
            AppRoute::ManualDetail => "/manual/manual-detail".to_string(),
            AppRoute::PromptPlaybook => "/prompt-playbook".to_string(),
            AppRoute::Admin => "/admin".to_string(),
            AppRoute::PosterEditor => "/poster-editor".to_string(),
            AppRoute::NotFound { path } => path.clone(),
        }
    }

    /// Ключ модуля бокового меню, подсвечиваемого для страницы
    pub fn module_key(&self) -> &'static str {
        match self {
            AppRoute::Home => "home",
            AppRoute::ProductBoms { .. }
            | AppRoute::ProductOverview { .. }
            | AppRoute::BomDetail { .. }
            | AppRoute::ProductDetail { .. } => "kbSearch",
            AppRoute::ManualReview | AppRoute::ManualDetail | AppRoute::PromptPlaybook => "manual",
            AppRoute::PosterEditor => "export",
            AppRoute::Admin => "admin",
            AppRoute::NotFound { .. } => "home",
        }
    }

    pub fn title(&self) -> String {
        match self {
            AppRoute::Home => "BOM 配置".to_string(),
            AppRoute::ProductBoms { product } => format!("{} · BOM", product),
            AppRoute::ProductOverview { product } => format!("{} · 概览", product),
            AppRoute::BomDetail { bom, .. } => format!("BOM {}", bom),
            AppRoute::ProductDetail { product } => product.clone(),
            AppRoute::ManualReview => "说明书审核".to_string(),
            AppRoute::ManualDetail => "说明书详情".to_string(),
            AppRoute::PromptPlaybook => "提示词手册".to_string(),
            AppRoute::Admin => "管理".to_string(),
            AppRoute::PosterEditor => "海报编辑".to_string(),
            AppRoute::NotFound { .. } => "页面不存在".to_string(),
        }
    }
}

/// Modules of the side menu: (key, label, landing route)
pub fn modules() -> Vec<(&'static str, &'static str, AppRoute)> {
    vec![
        ("home", "BOM 配置", AppRoute::Home),
        ("manual", "说明书", AppRoute::ManualReview),
        ("export", "导出", AppRoute::PosterEditor),
        ("admin", "管理", AppRoute::Admin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("/manual/review"), AppRoute::ManualReview);
        assert_eq!(
            AppRoute::parse("/product/Alpine/boms/A11AA1111AAAAAAAAAAAAA?tab=1"),
            AppRoute::BomDetail {
                product: "Alpine".into(),
                bom: "A11AA1111AAAAAAAAAAAAA".into()
            }
        );
        assert_eq!(
            AppRoute::parse("/product/Alpine/"),
            AppRoute::ProductDetail {
                product: "Alpine".into()
            }
        );
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            AppRoute::parse("/product/Alpine/boms/x/y"),
            AppRoute::NotFound {
                path: "/product/Alpine/boms/x/y".into()
            }
        );
    }

    #[test]
    fn test_path_round_trip_with_encoding() {
        let route = AppRoute::BomDetail {
            product: "Alpine 2".into(),
            bom: "A1/B".into(),
        };
        let path = route.to_path();
        assert_eq!(path, "/product/Alpine%202/boms/A1%2FB");
        assert_eq!(AppRoute::parse(&path), route);
    }

    #[test]
    fn test_module_keys() {
        assert_eq!(AppRoute::Home.module_key(), "home");
        assert_eq!(
            AppRoute::ProductOverview {
                product: "x".into()
            }
            .module_key(),
            "kbSearch"
        );
        assert_eq!(AppRoute::PromptPlaybook.module_key(), "manual");
        assert_eq!(AppRoute::PosterEditor.module_key(), "export");
        assert_eq!(AppRoute::Admin.module_key(), "admin");
        assert!(modules().iter().all(|(key, _, route)| route.module_key() == *key));
    }
}
