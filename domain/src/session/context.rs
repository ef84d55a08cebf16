//! Session context entity

use crate::core::error::DomainError;
use crate::directory::remote::RemoteDirectoryCache;
use crate::directory::static_list::StaticClientDirectory;
use crate::form::variant::FormVariant;

/// Where the session's selectable client names come from
#[derive(Debug, Clone, PartialEq)]
pub enum ClientDirectory {
    /// Editable in-memory list
    Static(StaticClientDirectory),
    /// Remote record store, cached after the first load
    Remote(RemoteDirectoryCache),
    /// No directory; the client name is typed freely
    FreeText,
}

/// Mutable state owned by one form session.
///
/// Built at session start and passed by `&mut` to every operation that
/// reads or changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    variant: FormVariant,
    login: String,
    directory: ClientDirectory,
}

impl SessionContext {
    pub fn new(variant: FormVariant, login: impl Into<String>, directory: ClientDirectory) -> Self {
        Self {
            variant,
            login: login.into(),
            directory,
        }
    }

    /// Session with the directory strategy implied by `variant`.
    ///
    /// `seed` is only used by the static variant.
    pub fn for_variant(
        variant: FormVariant,
        login: impl Into<String>,
        seed: StaticClientDirectory,
    ) -> Self {
        let directory = match variant {
            FormVariant::Static => ClientDirectory::Static(seed),
            FormVariant::Remote => ClientDirectory::Remote(RemoteDirectoryCache::new()),
            FormVariant::Generic => ClientDirectory::FreeText,
        };
        Self::new(variant, login, directory)
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn set_login(&mut self, login: impl Into<String>) {
        self.login = login.into();
    }

    pub fn directory(&self) -> &ClientDirectory {
        &self.directory
    }

    /// The editable list, or `DirectoryReadOnly` for other strategies
    pub fn static_directory_mut(&mut self) -> Result<&mut StaticClientDirectory, DomainError> {
        match &mut self.directory {
            ClientDirectory::Static(directory) => Ok(directory),
            _ => Err(DomainError::DirectoryReadOnly),
        }
    }

    pub fn remote_cache(&self) -> Option<&RemoteDirectoryCache> {
        match &self.directory {
            ClientDirectory::Remote(cache) => Some(cache),
            _ => None,
        }
    }

    pub fn remote_cache_mut(&mut self) -> Option<&mut RemoteDirectoryCache> {
        match &mut self.directory {
            ClientDirectory::Remote(cache) => Some(cache),
            _ => None,
        }
    }

    /// Names currently offered for selection
    pub fn client_names(&self) -> Vec<String> {
        match &self.directory {
            ClientDirectory::Static(directory) => directory.names().to_vec(),
            ClientDirectory::Remote(cache) => {
                cache.entries().iter().map(|e| e.name.clone()).collect()
            }
            ClientDirectory::FreeText => Vec::new(),
        }
    }

    /// Whether any typed name is accepted as the client.
    ///
    /// True without a directory, and for the remote strategy whenever it has
    /// nothing to offer (not loaded, empty, or failed).
    pub fn accepts_free_text(&self) -> bool {
        match &self.directory {
            ClientDirectory::FreeText => true,
            ClientDirectory::Remote(cache) => cache.entries().is_empty(),
            ClientDirectory::Static(_) => false,
        }
    }

    /// Resolve user input to the client's display name.
    ///
    /// Accepts a name matched ignoring case or, when no name matches, a
    /// 1-based position in [`client_names`](Self::client_names). Names win
    /// so a client literally called "2" stays selectable. With free text
    /// allowed the trimmed input is returned as-is.
    pub fn select_client(&self, input: &str) -> Result<String, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::EmptyClientName);
        }
        if self.accepts_free_text() {
            return Ok(input.to_string());
        }

        let names = self.client_names();
        let needle = input.to_lowercase();
        if let Some(name) = names.iter().find(|name| name.to_lowercase() == needle) {
            return Ok(name.clone());
        }

        input
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|i| names.get(i).cloned())
            .ok_or_else(|| DomainError::ClientNotFound(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::entry::ClientEntry;
    use crate::directory::remote::DirectoryFetch;

    #[test]
    fn test_for_variant_picks_strategy() {
        let seed = StaticClientDirectory::default();
        assert!(matches!(
            SessionContext::for_variant(FormVariant::Static, "", seed.clone()).directory(),
            ClientDirectory::Static(_)
        ));
        assert!(matches!(
            SessionContext::for_variant(FormVariant::Remote, "", seed.clone()).directory(),
            ClientDirectory::Remote(_)
        ));
        assert_eq!(
            SessionContext::for_variant(FormVariant::Generic, "", seed).directory(),
            &ClientDirectory::FreeText
        );
    }

    #[test]
    fn test_select_static_by_name_or_position() {
        let mut session =
            SessionContext::for_variant(FormVariant::Static, "", StaticClientDirectory::default());
        session.static_directory_mut().unwrap().add("Acme").unwrap();

        assert_eq!(session.select_client("ACME").unwrap(), "Acme");
        assert_eq!(session.select_client("1").unwrap(), "koala");
        assert_eq!(session.select_client("2").unwrap(), "Acme");
        assert_eq!(
            session.select_client("Initech"),
            Err(DomainError::ClientNotFound("Initech".to_string()))
        );
    }

    #[test]
    fn test_numeric_client_name_beats_position() {
        let seed = StaticClientDirectory::new(vec![
            "koala".to_string(),
            "Acme".to_string(),
            "2".to_string(),
        ]);
        let session = SessionContext::for_variant(FormVariant::Static, "", seed);

        assert_eq!(session.select_client("2").unwrap(), "2");
        assert_eq!(session.select_client("3").unwrap(), "2");
        assert_eq!(session.select_client("1").unwrap(), "koala");
        assert_eq!(
            session.select_client("4"),
            Err(DomainError::ClientNotFound("4".to_string()))
        );
    }

    #[test]
    fn test_remote_without_entries_falls_back_to_free_text() {
        let mut session =
            SessionContext::for_variant(FormVariant::Remote, "", StaticClientDirectory::default());
        assert!(session.accepts_free_text());
        assert_eq!(session.select_client(" Anyone ").unwrap(), "Anyone");

        session
            .remote_cache_mut()
            .unwrap()
            .store(DirectoryFetch::Failed("offline".to_string()));
        assert!(session.accepts_free_text());

        session
            .remote_cache_mut()
            .unwrap()
            .store(DirectoryFetch::Loaded(vec![ClientEntry::new("Globex")]));
        assert!(!session.accepts_free_text());
        assert_eq!(session.select_client("globex").unwrap(), "Globex");
        assert!(session.select_client("Anyone").is_err());
    }

    #[test]
    fn test_non_static_directory_is_read_only() {
        let mut session =
            SessionContext::for_variant(FormVariant::Generic, "", StaticClientDirectory::default());
        assert_eq!(
            session.static_directory_mut().unwrap_err(),
            DomainError::DirectoryReadOnly
        );
    }

    #[test]
    fn test_login_is_mutable() {
        let mut session = SessionContext::new(FormVariant::Generic, "guest", ClientDirectory::FreeText);
        session.set_login("octocat");
        assert_eq!(session.login(), "octocat");
    }
}
