//! Static endpoint table.

use super::EndpointDefinition as E;
use super::HttpMethod::{Delete, Get, Post};

pub(super) static ENDPOINTS: &[E] = &[
    // Audio
    E::new("createSpeech", Post, "/audio/speech"),
    E::new("createTranscription", Post, "/audio/transcriptions"),
    E::new("createTranslation", Post, "/audio/translations"),
    // Chat
    E::new("createChatCompletion", Post, "/chat/completions"),
    E::new("listChatCompletions", Get, "/chat/completions"),
    E::new("retrieveChatCompletion", Get, "/chat/completions/{completion_id}"),
    E::new("updateChatCompletion", Post, "/chat/completions/{completion_id}"),
    E::new("deleteChatCompletion", Delete, "/chat/completions/{completion_id}"),
    E::new("listChatMessages", Get, "/chat/completions/{completion_id}/messages"),
    // Completions (legacy)
    E::new("createCompletion", Post, "/completions"),
    // Embeddings
    E::new("createEmbedding", Post, "/embeddings"),
    // Fine-tuning
    E::new("createFineTuningJob", Post, "/fine_tuning/jobs"),
    E::new("listFineTuningJobs", Get, "/fine_tuning/jobs"),
    E::new("retrieveFineTuningJob", Get, "/fine_tuning/jobs/{fine_tuning_job_id}"),
    E::new("cancelFineTuning", Post, "/fine_tuning/jobs/{fine_tuning_job_id}/cancel"),
    E::new("listFineTuningEvents", Get, "/fine_tuning/jobs/{fine_tuning_job_id}/events"),
    E::new("listFineTuningCheckpoints", Get, "/fine_tuning/jobs/{fine_tuning_job_id}/checkpoints"),
    // Batch
    E::new("createBatch", Post, "/batches"),
    E::new("retrieveBatch", Get, "/batches/{batch_id}"),
    E::new("cancelBatch", Post, "/batches/{batch_id}/cancel"),
    E::new("listBatches", Get, "/batches"),
    // Files
    E::new("uploadFile", Post, "/files"),
    E::new("listFiles", Get, "/files"),
    E::new("retrieveFile", Get, "/files/{file_id}"),
    E::new("deleteFile", Delete, "/files/{file_id}"),
    E::new("retrieveFileContent", Get, "/files/{file_id}/content"),
    // Uploads
    E::new("createUpload", Post, "/uploads"),
    E::new("addUploadPart", Post, "/uploads/{upload_id}/parts"),
    E::new("completeUpload", Post, "/uploads/{upload_id}/complete"),
    E::new("cancelUpload", Post, "/uploads/{upload_id}/cancel"),
    // Images
    E::new("createImage", Post, "/images/generations"),
    E::new("createImageEdit", Post, "/images/edits"),
    E::new("createImageVariation", Post, "/images/variations"),
    // Models
    E::new("listModels", Get, "/models"),
    E::new("retrieveModel", Get, "/models/{model}"),
    E::new("deleteModel", Delete, "/models/{model}"),
    // Moderations
    E::new("createModeration", Post, "/moderations"),
    // Responses
    E::new("createResponse", Post, "/responses"),
    E::new("retrieveResponse", Get, "/responses/{response_id}"),
    E::new("deleteResponse", Delete, "/responses/{response_id}"),
    E::new("listInputItems", Get, "/responses/{response_id}/input_items"),
    // Realtime
    E::new("createRealtimeSession", Post, "/realtime/sessions"),
    E::new("createRealtimeTranscriptionSession", Post, "/realtime/transcription_sessions"),
    // Assistants
    E::new("createAssistant", Post, "/assistants"),
    E::new("listAssistants", Get, "/assistants"),
    E::new("retrieveAssistant", Get, "/assistants/{assistant_id}"),
    E::new("modifyAssistant", Post, "/assistants/{assistant_id}"),
    E::new("deleteAssistant", Delete, "/assistants/{assistant_id}"),
    // Threads
    E::new("createThread", Post, "/threads"),
    E::new("retrieveThread", Get, "/threads/{thread_id}"),
    E::new("modifyThread", Post, "/threads/{thread_id}"),
    E::new("deleteThread", Delete, "/threads/{thread_id}"),
    // Messages
    E::new("createMessage", Post, "/threads/{thread_id}/messages"),
    E::new("listMessages", Get, "/threads/{thread_id}/messages"),
    E::new("retrieveMessage", Get, "/threads/{thread_id}/messages/{message_id}"),
    E::new("modifyMessage", Post, "/threads/{thread_id}/messages/{message_id}"),
    E::new("deleteMessage", Delete, "/threads/{thread_id}/messages/{message_id}"),
    // Runs
    E::new("createRun", Post, "/threads/{thread_id}/runs"),
    E::new("createThreadAndRun", Post, "/threads/runs"),
    E::new("listRuns", Get, "/threads/{thread_id}/runs"),
    E::new("retrieveRun", Get, "/threads/{thread_id}/runs/{run_id}"),
    E::new("modifyRun", Post, "/threads/{thread_id}/runs/{run_id}"),
    E::new("submitToolOutputsToRun", Post, "/threads/{thread_id}/runs/{run_id}/submit_tool_outputs"),
    E::new("cancelRun", Post, "/threads/{thread_id}/runs/{run_id}/cancel"),
    // Run steps
    E::new("listRunSteps", Get, "/threads/{thread_id}/runs/{run_id}/steps"),
    E::new("retrieveRunStep", Get, "/threads/{thread_id}/runs/{run_id}/steps/{step_id}"),
    // Vector stores
    E::new("createVectorStore", Post, "/vector_stores"),
    E::new("listVectorStores", Get, "/vector_stores"),
    E::new("retrieveVectorStore", Get, "/vector_stores/{vector_store_id}"),
    E::new("modifyVectorStore", Post, "/vector_stores/{vector_store_id}"),
    E::new("deleteVectorStore", Delete, "/vector_stores/{vector_store_id}"),
    E::new("searchVectorStore", Post, "/vector_stores/{vector_store_id}/search"),
    // Vector store files
    E::new("createVectorStoreFile", Post, "/vector_stores/{vector_store_id}/files"),
    E::new("listVectorStoreFiles", Get, "/vector_stores/{vector_store_id}/files"),
    E::new("retrieveVectorStoreFile", Get, "/vector_stores/{vector_store_id}/files/{file_id}"),
    E::new("updateVectorStoreFileAttributes", Post, "/vector_stores/{vector_store_id}/files/{file_id}"),
    E::new("deleteVectorStoreFile", Delete, "/vector_stores/{vector_store_id}/files/{file_id}"),
    E::new("retrieveVectorStoreFileContent", Get, "/vector_stores/{vector_store_id}/files/{file_id}/content"),
    // Vector store file batches
    E::new("createVectorStoreFileBatch", Post, "/vector_stores/{vector_store_id}/file_batches"),
    E::new("retrieveVectorStoreFileBatch", Get, "/vector_stores/{vector_store_id}/file_batches/{batch_id}"),
    E::new("cancelVectorStoreFileBatch", Post, "/vector_stores/{vector_store_id}/file_batches/{batch_id}/cancel"),
    E::new("listVectorStoreFilesInBatch", Get, "/vector_stores/{vector_store_id}/file_batches/{batch_id}/files"),
    // Administration: invites
    E::new("listInvites", Get, "/organization/invites"),
    E::new("createInvite", Post, "/organization/invites"),
    E::new("retrieveInvite", Get, "/organization/invites/{invite_id}"),
    E::new("deleteInvite", Delete, "/organization/invites/{invite_id}"),
    // Administration: users
    E::new("listUsers", Get, "/organization/users"),
    E::new("modifyUser", Post, "/organization/users/{user_id}"),
    E::new("retrieveUser", Get, "/organization/users/{user_id}"),
    E::new("deleteUser", Delete, "/organization/users/{user_id}"),
    // Administration: projects
    E::new("listProjects", Get, "/organization/projects"),
    E::new("createProject", Post, "/organization/projects"),
    E::new("retrieveProject", Get, "/organization/projects/{project_id}"),
    E::new("modifyProject", Post, "/organization/projects/{project_id}"),
    E::new("archiveProject", Post, "/organization/projects/{project_id}/archive"),
    // Administration: project users
    E::new("listProjectUsers", Get, "/organization/projects/{project_id}/users"),
    E::new("createProjectUser", Post, "/organization/projects/{project_id}/users"),
    E::new("retrieveProjectUser", Get, "/organization/projects/{project_id}/users/{user_id}"),
    E::new("modifyProjectUser", Post, "/organization/projects/{project_id}/users/{user_id}"),
    E::new("deleteProjectUser", Delete, "/organization/projects/{project_id}/users/{user_id}"),
    // Administration: project service accounts
    E::new("listProjectServiceAccounts", Get, "/organization/projects/{project_id}/service_accounts"),
    E::new("createProjectServiceAccount", Post, "/organization/projects/{project_id}/service_accounts"),
    E::new("retrieveProjectServiceAccount", Get, "/organization/projects/{project_id}/service_accounts/{service_account_id}"),
    E::new("deleteProjectServiceAccount", Delete, "/organization/projects/{project_id}/service_accounts/{service_account_id}"),
    // Administration: project API keys
    E::new("listProjectApiKeys", Get, "/organization/projects/{project_id}/api_keys"),
    E::new("retrieveProjectApiKey", Get, "/organization/projects/{project_id}/api_keys/{key_id}"),
    E::new("deleteProjectApiKey", Delete, "/organization/projects/{project_id}/api_keys/{key_id}"),
    // Administration: project rate limits
    E::new("listProjectRateLimits", Get, "/organization/projects/{project_id}/rate_limits"),
    E::new("modifyProjectRateLimit", Post, "/organization/projects/{project_id}/rate_limits/{rate_limit_id}"),
    // Administration: admin API keys
    E::new("listAdminApiKeys", Get, "/organization/admin_api_keys"),
    E::new("createAdminApiKey", Post, "/organization/admin_api_keys"),
    E::new("retrieveAdminApiKey", Get, "/organization/admin_api_keys/{key_id}"),
    E::new("deleteAdminApiKey", Delete, "/organization/admin_api_keys/{key_id}"),
    // Administration: audit logs
    E::new("listAuditLogs", Get, "/organization/audit_logs"),
    // Administration: usage and costs
    E::new("usageCompletions", Get, "/organization/usage/completions"),
    E::new("usageEmbeddings", Get, "/organization/usage/embeddings"),
    E::new("usageModerations", Get, "/organization/usage/moderations"),
    E::new("usageImages", Get, "/organization/usage/images"),
    E::new("usageAudioSpeeches", Get, "/organization/usage/audio_speeches"),
    E::new("usageAudioTranscriptions", Get, "/organization/usage/audio_transcriptions"),
    E::new("usageVectorStores", Get, "/organization/usage/vector_stores"),
    E::new("usageCodeInterpreterSessions", Get, "/organization/usage/code_interpreter_sessions"),
    E::new("usageCosts", Get, "/organization/costs"),
    // Administration: certificates
    E::new("listOrganizationCertificates", Get, "/organization/certificates"),
    E::new("uploadCertificate", Post, "/organization/certificates"),
    E::new("activateOrganizationCertificates", Post, "/organization/certificates/activate"),
    E::new("deactivateOrganizationCertificates", Post, "/organization/certificates/deactivate"),
    E::new("getCertificate", Get, "/organization/certificates/{certificate_id}"),
    E::new("modifyCertificate", Post, "/organization/certificates/{certificate_id}"),
    E::new("deleteCertificate", Delete, "/organization/certificates/{certificate_id}"),
    E::new("listProjectCertificates", Get, "/organization/projects/{project_id}/certificates"),
    E::new("activateProjectCertificates", Post, "/organization/projects/{project_id}/certificates/activate"),
    E::new("deactivateProjectCertificates", Post, "/organization/projects/{project_id}/certificates/deactivate"),
];
