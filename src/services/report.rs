use super::aggregator::RunSummary;
use super::executor::DeletionOutcome;
use super::Classified;
use crate::domain::ResourceGroup;
use std::collections::BTreeMap;

const RULER: &str = "================================================================================";

fn by_subscription(groups: &[ResourceGroup]) -> BTreeMap<&str, Vec<&ResourceGroup>> {
    let mut map: BTreeMap<&str, Vec<&ResourceGroup>> = BTreeMap::new();
    for group in groups {
        map.entry(group.subscription_name.as_str())
            .or_default()
            .push(group);
    }
    map
}

/// Prévia dos grupos que serão deletados e dos que serão mantidos,
/// agrupados por assinatura.
pub fn display_preview(classified: &Classified) {
    println!();
    println!("{RULER}");
    println!("PRÉVIA: GRUPOS PARA DELETAR");
    println!("{RULER}");
    println!();

    if classified.to_delete.is_empty() {
        println!("Nenhum grupo será deletado.");
        println!();
    } else {
        println!("Total de grupos a deletar: {}", classified.to_delete.len());
        println!();

        for (subscription, groups) in by_subscription(&classified.to_delete) {
            println!("Assinatura: {subscription}");
            for group in groups {
                println!("   • {}", group.qualified_name());
            }
            println!();
        }
    }

    if !classified.to_keep.is_empty() {
        println!("{RULER}");
        println!("GRUPOS QUE SERÃO MANTIDOS (PROTEGIDOS)");
        println!("{RULER}");
        println!();

        for (subscription, groups) in by_subscription(&classified.to_keep) {
            println!("Assinatura: {subscription}");
            for group in groups {
                println!("   ✓ {}", group.qualified_name());
            }
            println!();
        }
    }

    println!("{RULER}");
}

/// Resumo final da operação. Sempre exibido, mesmo quando parte das
/// assinaturas não pôde ser enumerada.
pub fn display_summary(
    classified: &Classified,
    outcomes: &[DeletionOutcome],
    summary: &RunSummary,
    dry_run: bool,
) {
    println!();
    println!("{RULER}");
    println!("RESUMO DA OPERAÇÃO");
    println!("{RULER}");
    println!();

    if dry_run {
        println!("[DRY-RUN] Modo simulação ativado - nenhum grupo foi realmente deletado");
        println!();
    }

    println!("Grupos mantidos (protegidos): {}", summary.kept);
    for group in &classified.to_keep {
        println!("   ✓ {}", group.qualified_name());
    }
    println!();

    println!("Grupos deletados com sucesso: {}", summary.deleted);
    for outcome in outcomes.iter().filter(|o| o.succeeded) {
        println!("   ✓ {}", outcome.group.qualified_name());
    }
    println!();

    println!("Grupos que falharam na deleção: {}", summary.failed);
    for outcome in outcomes.iter().filter(|o| !o.succeeded) {
        println!("   ✗ {}", outcome.group.qualified_name());
    }
    println!();

    println!(
        "Grupos identificados para deleção: {}",
        classified.to_delete.len()
    );
    println!("{RULER}");
}
