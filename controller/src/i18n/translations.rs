use super::TextKey;

pub(super) fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Book of Documents Generator",
        TextKey::UploadTitle => "Upload Documents",
        TextKey::UploadInstructions => {
            "Drag and drop PDF or ZIP files here, or click to select files"
        }
        TextKey::ChooseFiles => "Choose Files",
        TextKey::UploadFolderOption => "You can also upload a folder containing PDF files",
        TextKey::DocumentList => "Document List",
        TextKey::ClearAll => "Clear All",
        TextKey::GenerateBook => "Generate Book",
        TextKey::DragHint => "Drag items to reorder documents in the final PDF",
        TextKey::NoDocuments => "No documents uploaded yet",
        TextKey::ViewLogs => "View Recent Logs",
        TextKey::RefreshLogs => "Refresh Logs",
        TextKey::Uploading => "Uploading Documents",
        TextKey::Generating => "Generating Book of Documents",
        TextKey::DownloadComplete => "Download complete!",
        TextKey::BookDownloaded => "Your Book of Documents has been downloaded.",
        TextKey::Error => "Error!",
        TextKey::Close => "Close",
        TextKey::PreviewNotAvailable => {
            "Cannot preview: This document has errors and is not available for preview."
        }
        TextKey::DocumentStatusSuccess => "success",
        TextKey::DocumentStatusError => "error",
        TextKey::DocumentPages => "pages",
        TextKey::Language => "Language",
        TextKey::InitializingGeneration => "Initializing document generation...",
        TextKey::ProcessingContent => "Processing document content...",
        TextKey::CreatingIndex => "Creating index and tables...",
        TextKey::MergingDocuments => "Merging documents...",
        TextKey::Finalizing => "Finalizing your Book of Documents...",
        TextKey::DownloadProgress => "Download in progress...",
        TextKey::ShowDetails => "Show technical details",
        TextKey::HideDetails => "Hide technical details",
        TextKey::UnknownError => "Unknown error occurred",
        TextKey::ConfirmClear => {
            "Are you sure you want to clear all documents? This cannot be undone."
        }
        TextKey::UploadFailed => "An error occurred during upload.",
        TextKey::ServerUnreachable => "The server could not be reached. Please try again.",
        TextKey::Delete => "Delete",
    }
}

pub(super) fn french(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Générateur de Livre de Documents",
        TextKey::UploadTitle => "Télécharger des Documents",
        TextKey::UploadInstructions => {
            "Glissez et déposez des fichiers PDF ou ZIP ici, ou cliquez pour sélectionner des fichiers"
        }
        TextKey::ChooseFiles => "Choisir des Fichiers",
        TextKey::UploadFolderOption => {
            "Vous pouvez également télécharger un dossier contenant des fichiers PDF"
        }
        TextKey::DocumentList => "Liste des Documents",
        TextKey::ClearAll => "Tout Effacer",
        TextKey::GenerateBook => "Générer le Livre",
        TextKey::DragHint => {
            "Faites glisser les éléments pour réorganiser les documents dans le PDF final"
        }
        TextKey::NoDocuments => "Aucun document n'a encore été téléchargé",
        TextKey::ViewLogs => "Voir les Logs Récents",
        TextKey::RefreshLogs => "Actualiser les Logs",
        TextKey::Uploading => "Téléchargement des Documents",
        TextKey::Generating => "Génération du Livre de Documents",
        TextKey::DownloadComplete => "Téléchargement terminé !",
        TextKey::BookDownloaded => "Votre Livre de Documents a été téléchargé.",
        TextKey::Error => "Erreur !",
        TextKey::Close => "Fermer",
        TextKey::PreviewNotAvailable => {
            "Impossible de prévisualiser : Ce document contient des erreurs et n'est pas disponible pour la prévisualisation."
        }
        TextKey::DocumentStatusSuccess => "succès",
        TextKey::DocumentStatusError => "erreur",
        TextKey::DocumentPages => "pages",
        TextKey::Language => "Langue",
        TextKey::InitializingGeneration => "Initialisation de la génération du document...",
        TextKey::ProcessingContent => "Traitement du contenu du document...",
        TextKey::CreatingIndex => "Création de l'index et des tableaux...",
        TextKey::MergingDocuments => "Fusion des documents...",
        TextKey::Finalizing => "Finalisation de votre Livre de Documents...",
        TextKey::DownloadProgress => "Téléchargement en cours...",
        TextKey::ShowDetails => "Afficher les détails techniques",
        TextKey::HideDetails => "Masquer les détails techniques",
        TextKey::UnknownError => "Une erreur inconnue s'est produite",
        TextKey::ConfirmClear => {
            "Êtes-vous sûr de vouloir effacer tous les documents ? Cette action ne peut pas être annulée."
        }
        TextKey::UploadFailed => "Une erreur s'est produite lors du téléchargement.",
        TextKey::ServerUnreachable => "Le serveur est injoignable. Veuillez réessayer.",
        TextKey::Delete => "Supprimer",
    }
}
