use std::fmt::Debug;
use std::io::Cursor;

use google_drive3::{api::File, api::Scope, DriveHub};
use tokio::runtime::Runtime;

use super::logo::{InlineImage, LogoError, LogoStore};

/// Thin wrapper around the generated google-drive3 client allowing the
/// synchronous create path to persist logos without exposing async details.
pub struct GoogleDriveLogoStore<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    hub: DriveHub<C>,
    runtime: Runtime,
    folder_id: Option<String>,
}

impl<C> GoogleDriveLogoStore<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    pub fn new(hub: DriveHub<C>, runtime: Runtime, folder_id: Option<String>) -> Self {
        Self {
            hub,
            runtime,
            folder_id,
        }
    }

    pub fn with_runtime(hub: DriveHub<C>, folder_id: Option<String>) -> Result<Self, LogoError> {
        let runtime = Runtime::new().map_err(|err| LogoError::Backend(err.to_string()))?;
        Ok(Self::new(hub, runtime, folder_id))
    }

    fn map_error<E: std::fmt::Display>(err: E) -> LogoError {
        LogoError::Backend(err.to_string())
    }
}

impl<C> Debug for GoogleDriveLogoStore<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveLogoStore").finish_non_exhaustive()
    }
}

impl<C> LogoStore for GoogleDriveLogoStore<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn store(&self, file_name: &str, image: &InlineImage) -> Result<String, LogoError> {
        let metadata = File {
            name: Some(file_name.to_string()),
            parents: self.folder_id.as_ref().map(|parent| vec![parent.clone()]),
            ..File::default()
        };

        let mime_type: mime::Mime = image
            .mime_type
            .parse()
            .map_err(GoogleDriveLogoStore::<C>::map_error)?;
        let cursor = Cursor::new(image.bytes.clone());

        let result = self.runtime.block_on(async {
            self.hub
                .files()
                .create(metadata)
                .param("fields", "id,webViewLink")
                .supports_all_drives(true)
                .add_scope(Scope::File)
                .upload(cursor, mime_type)
                .await
        });

        let (_, file) = result.map_err(GoogleDriveLogoStore::<C>::map_error)?;
        if let Some(link) = file.web_view_link {
            return Ok(link);
        }
        file.id
            .map(|id| format!("https://drive.google.com/uc?id={id}"))
            .ok_or_else(|| LogoError::Backend("upload returned no file id".to_string()))
    }
}
