//! Spanish translations / Traducciones al espa\u{00F1}ol

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculadora de Consumo El\u{00E9}ctrico".into());
    t.insert("app.help_hint".into(), "Escriba 'help' para ver los comandos".into());
    t.insert("app.goodbye".into(), "Hasta luego".into());
    t.insert("app.error".into(), "Error".into());

    // Regional settings
    t.insert("region.title".into(), "Configuraci\u{00F3}n Regional".into());
    t.insert("region.country".into(), "Pa\u{00ED}s".into());
    t.insert("region.currency".into(), "Moneda".into());
    t.insert("region.tariff".into(), "Tarifa el\u{00E9}ctrica (por kWh)".into());
    t.insert("region.default_tariff".into(), "Tarifa promedio".into());
    t.insert("region.manual".into(), "manual".into());

    // Appliance form
    t.insert("form.add".into(), "Agregar Electrodom\u{00E9}stico".into());
    t.insert("form.edit".into(), "Editar Electrodom\u{00E9}stico".into());
    t.insert("form.added".into(), "Electrodom\u{00E9}stico agregado".into());
    t.insert("form.saved".into(), "Cambios guardados".into());
    t.insert("form.cancelled".into(), "Edici\u{00F3}n cancelada".into());
    t.insert("form.deleted".into(), "Electrodom\u{00E9}stico eliminado".into());
    t.insert("form.editing_hint".into(), "Use 'save <nombre> <watts> <horas>' para guardar los cambios o 'cancel' para descartarlos".into());

    // Appliance list
    t.insert("list.title".into(), "Lista de Electrodom\u{00E9}sticos".into());
    t.insert("list.id".into(), "Id".into());
    t.insert("list.name".into(), "Nombre".into());
    t.insert("list.power".into(), "Potencia (W)".into());
    t.insert("list.hours".into(), "Horas diarias".into());
    t.insert("list.monthly_energy".into(), "Consumo mensual (kWh)".into());
    t.insert("list.monthly_cost".into(), "Costo mensual".into());
    t.insert("list.empty".into(), "Todav\u{00ED}a no hay electrodom\u{00E9}sticos".into());

    // Summary
    t.insert("summary.title".into(), "Resumen de Consumo".into());
    t.insert("summary.total_energy".into(), "Consumo Total Mensual".into());
    t.insert("summary.total_cost".into(), "Costo Estimado Mensual".into());

    // Breakdown
    t.insert("breakdown.title".into(), "Desglose de Costos por Electrodom\u{00E9}stico".into());
    t.insert("breakdown.appliance".into(), "Electrodom\u{00E9}stico".into());
    t.insert("breakdown.monthly_cost".into(), "Costo Mensual".into());

    // Chart
    t.insert("chart.title".into(), "Gr\u{00E1}ficos de Consumo y Costo".into());
    t.insert("chart.period".into(), "Periodo".into());
    t.insert("chart.period.daily".into(), "Diario".into());
    t.insert("chart.period.weekly".into(), "Semanal".into());
    t.insert("chart.period.monthly".into(), "Mensual".into());
    t.insert("chart.energy".into(), "Consumo (kWh)".into());
    t.insert("chart.cost".into(), "Costo".into());

    // Theme
    t.insert("theme.title".into(), "Tema".into());
    t.insert("theme.light".into(), "Claro".into());
    t.insert("theme.dark".into(), "Oscuro".into());

    // Language
    t.insert("lang.title".into(), "Idioma".into());

    // Help
    t.insert("help.commands".into(), [
        "Comandos:",
        "  add <nombre> <watts> <horas>    Agregar un electrodom\u{00E9}stico",
        "  edit <id>                       Cargar un electrodom\u{00E9}stico en el formulario",
        "  save <nombre> <watts> <horas>   Guardar el electrodom\u{00E9}stico en edici\u{00F3}n",
        "  cancel                          Descartar la edici\u{00F3}n",
        "  delete <id>                     Eliminar un electrodom\u{00E9}stico",
        "  list                            Ver la lista",
        "  summary                         Ver los totales mensuales",
        "  breakdown                       Ver el costo por electrodom\u{00E9}stico",
        "  chart [diario|semanal|mensual]  Dibujar el gr\u{00E1}fico de consumo",
        "  export                          Imprimir la serie del gr\u{00E1}fico en JSON",
        "  country [<c\u{00F3}digo>]             Listar pa\u{00ED}ses o seleccionar uno",
        "  tariff <precio>                 Fijar el precio por kWh",
        "  theme                           Alternar tema claro/oscuro",
        "  lang <es|en>                    Cambiar idioma",
        "  quit                            Salir",
    ].join("\n"));

    t
}
