use crate::domain::{CloudClient, ResourceGroup, Subscription, SweepError};
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::info;

/// Azure CLI adapter. Every operation shells out to `az` and decodes its
/// JSON output where applicable.
#[derive(Debug)]
pub struct AzCliAdapter {
    az_command: PathBuf,
}

#[derive(Debug, Deserialize)]
struct AzSubscription {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AzGroup {
    name: String,
}

impl AzCliAdapter {
    pub fn new() -> Self {
        Self {
            az_command: find_az_command(),
        }
    }

    fn run<I, S>(&self, args: I) -> Result<Output, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.az_command)
            .args(args)
            .output()
            .map_err(|err| format!("erro ao executar {:?}: {err}", self.az_command))
    }

    fn run_json<T, I, S>(&self, args: I) -> Result<T, String>
    where
        T: serde::de::DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|err| format!("erro ao processar resposta JSON: {err}"))
    }
}

impl Default for AzCliAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudClient for AzCliAdapter {
    fn ensure_authenticated(&self) -> Result<(), SweepError> {
        info!("Verificando Azure CLI...");
        info!("Usando comando: {:?}", self.az_command);

        let version = self
            .run(["version"])
            .map_err(SweepError::Authentication)?;
        if !version.status.success() {
            return Err(SweepError::Authentication(
                "Azure CLI não está instalado ou não está acessível".to_string(),
            ));
        }
        info!("✓ Azure CLI encontrado");

        let account = self
            .run(["account", "show"])
            .map_err(SweepError::Authentication)?;
        if !account.status.success() {
            return Err(SweepError::Authentication(
                "não autenticado na Azure. Execute: az login".to_string(),
            ));
        }
        info!("✓ Autenticado na Azure");

        Ok(())
    }

    fn list_subscriptions(&self) -> Result<Vec<Subscription>, SweepError> {
        info!("Obtendo todas as assinaturas...");

        let subscriptions: Vec<AzSubscription> = self
            .run_json(["account", "list", "--output", "json"])
            .map_err(|detail| SweepError::Listing {
                subscription: "-".to_string(),
                detail,
            })?;

        info!("Encontradas {} assinatura(s)", subscriptions.len());

        Ok(subscriptions
            .into_iter()
            .map(|sub| Subscription {
                name: sub.name.unwrap_or_else(|| "Unknown".to_string()),
                id: sub.id,
            })
            .collect())
    }

    fn list_resource_groups(
        &self,
        subscription: &Subscription,
    ) -> Result<Vec<ResourceGroup>, SweepError> {
        let groups: Vec<AzGroup> = self
            .run_json([
                "group",
                "list",
                "--subscription",
                subscription.id.as_str(),
                "--output",
                "json",
            ])
            .map_err(|detail| SweepError::Listing {
                subscription: subscription.name.clone(),
                detail,
            })?;

        Ok(groups
            .into_iter()
            .map(|group| ResourceGroup::new(group.name, &subscription.id, &subscription.name))
            .collect())
    }

    fn delete_resource_group(&self, group: &ResourceGroup) -> Result<(), SweepError> {
        // Bloqueia até o CLI terminar; a política de timeout fica do lado
        // do provedor.
        let output = self
            .run([
                "group",
                "delete",
                "--name",
                group.name.as_str(),
                "--subscription",
                group.subscription_id.as_str(),
                "--yes",
            ])
            .map_err(|detail| SweepError::Deletion {
                group: group.qualified_name(),
                detail,
            })?;

        if !output.status.success() {
            return Err(SweepError::Deletion {
                group: group.qualified_name(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Localiza o comando `az` no PATH, com fallback para `az.cmd` e os
/// caminhos padrão de instalação no Windows.
fn find_az_command() -> PathBuf {
    if let Some(path) = which("az") {
        return path;
    }

    if cfg!(windows) {
        if let Some(path) = which("az.cmd") {
            return path;
        }

        for program_files in ["ProgramFiles", "ProgramFiles(x86)"] {
            if let Ok(base) = std::env::var(program_files) {
                let candidate = PathBuf::from(base)
                    .join("Microsoft SDKs/Azure/CLI2/wbin/az.cmd");
                if candidate.exists() {
                    return candidate;
                }
            }
        }
    }

    PathBuf::from("az")
}

fn which(binary: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
