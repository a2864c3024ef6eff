mod azure_voice_list;
mod static_voice_catalog;

pub use azure_voice_list::AzureVoiceListClient;
pub use static_voice_catalog::StaticVoiceCatalog;
