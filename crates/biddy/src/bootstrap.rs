//! Attaching the application to the page shell's root element.
use std::cell::Cell;

use lol_html::{RewriteStrSettings, element, html_content::ContentType, rewrite_str, text};

use crate::errors::BootstrapError;

/// How the application is attached to the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMode {
    /// The root is empty: render the application into it.
    Create,
    /// The root already holds prerendered markup: reuse it as is.
    Hydrate,
}

impl MountMode {
    /// Inspects the `#root` element of `document`.
    ///
    /// Whitespace-only text does not count as content.
    pub fn detect(document: &str) -> Result<Self, BootstrapError> {
        let root_found = Cell::new(false);
        let has_content = Cell::new(false);

        rewrite_str(
            document,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("#root", |_el| {
                        root_found.set(true);
                        Ok(())
                    }),
                    element!("#root *", |_el| {
                        has_content.set(true);
                        Ok(())
                    }),
                    text!("#root", |chunk| {
                        if !chunk.as_str().trim().is_empty() {
                            has_content.set(true);
                        }
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )?;

        if !root_found.get() {
            return Err(BootstrapError::RootNotFound);
        }

        Ok(if has_content.get() {
            MountMode::Hydrate
        } else {
            MountMode::Create
        })
    }
}

/// Attaches the application to `document`, calling `render` only when the root has to be filled.
pub fn mount<E>(
    document: &str,
    render: impl FnOnce() -> Result<String, E>,
) -> Result<(MountMode, String), E>
where
    E: From<BootstrapError>,
{
    let mode = MountMode::detect(document)?;

    let output = match mode {
        MountMode::Hydrate => document.to_string(),
        MountMode::Create => {
            let app_html = render()?;
            rewrite_str(
                document,
                RewriteStrSettings {
                    element_content_handlers: vec![element!("#root", |el| {
                        el.set_inner_content(&app_html, ContentType::Html);
                        Ok(())
                    })],
                    ..RewriteStrSettings::new()
                },
            )
            .map_err(BootstrapError::from)?
        }
    };

    Ok((mode, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;
    use crate::page::render_app;
    use crate::shell::{ROOT_PLACEHOLDER, page_shell};
    use crate::view::ViewState;

    #[test]
    fn test_empty_root_is_created() {
        let shell = page_shell(&fixtures::store().site).into_string();
        assert_eq!(MountMode::detect(&shell).unwrap(), MountMode::Create);
    }

    #[test]
    fn test_whitespace_root_is_created() {
        let document = "<body><div id=\"root\">\n   \n</div></body>";
        assert_eq!(MountMode::detect(document).unwrap(), MountMode::Create);
    }

    #[test]
    fn test_prerendered_root_is_hydrated() {
        let store = fixtures::store();
        let shell = page_shell(&store.site).into_string();
        let prerendered = shell.replacen(
            ROOT_PLACEHOLDER,
            &format!(
                "<div id=\"root\">{}</div>",
                render_app(&store, ViewState::default())
            ),
            1,
        );

        assert_eq!(MountMode::detect(&prerendered).unwrap(), MountMode::Hydrate);
    }

    #[test]
    fn test_text_only_root_is_hydrated() {
        let document = "<body><div id=\"root\">Loading</div></body>";
        assert_eq!(MountMode::detect(document).unwrap(), MountMode::Hydrate);
    }

    #[test]
    fn test_missing_root() {
        let document = "<body><div id=\"app\"></div></body>";
        assert!(matches!(
            MountMode::detect(document),
            Err(BootstrapError::RootNotFound)
        ));
        assert!(mount::<BootstrapError>(document, || unreachable!()).is_err());
    }

    #[test]
    fn test_mount_create_renders_into_root() {
        let document = "<body><div id=\"root\"></div><p>after</p></body>";

        let (mode, output) =
            mount::<BootstrapError>(document, || Ok("<main>app</main>".to_string())).unwrap();

        assert_eq!(mode, MountMode::Create);
        assert_eq!(
            output,
            "<body><div id=\"root\"><main>app</main></div><p>after</p></body>"
        );
    }

    #[test]
    fn test_mount_hydrate_reuses_markup() {
        let document = "<body><div id=\"root\"><main>prerendered</main></div></body>";

        let (mode, output) =
            mount::<BootstrapError>(document, || panic!("should not render")).unwrap();

        assert_eq!(mode, MountMode::Hydrate);
        assert_eq!(output, document);
    }
}
