use tracing::warn;

use crate::{
    diamdict,
    flags::MustMay,
    wireshark::{self, Dictionary},
};

const GROUPED: &str = "Grouped";

/// Rebuilds every wireshark application as a diameter application. Each one
/// receives the full global vendor table.
pub fn convert_dictionary(dictionary: &Dictionary) -> diamdict::File {
    let mut file = diamdict::File::default();
    for app in &dictionary.applications {
        let mut new_app = diamdict::Application {
            id: app.id,
            app_type: app.app_type.clone(),
            name: app.name.clone(),
            ..Default::default()
        };
        copy_vendors(&dictionary.vendors, &mut new_app);
        copy_commands(&app.commands, &mut new_app);
        copy_avps(&app.avps, &dictionary.vendors, &mut new_app);
        file.applications.push(new_app);
    }
    file
}

fn copy_vendors(src: &[wireshark::Vendor], dst: &mut diamdict::Application) {
    dst.vendors.extend(src.iter().map(|vendor| diamdict::Vendor {
        id: vendor.code,
        name: vendor.name.clone(),
    }));
}

fn copy_commands(src: &[wireshark::Command], dst: &mut diamdict::Application) {
    for cmd in src {
        dst.commands.push(diamdict::Command {
            code: cmd.code,
            name: cmd.name.clone(),
            short: cmd.name.clone(),
            request: command_rules(&cmd.request),
            answer: command_rules(&cmd.answer),
        });
    }
}

/// Fixed, then required, then optional.
fn command_rules(src: &wireshark::CommandRules) -> diamdict::CommandRules {
    let mut rules = Vec::new();
    copy_rules(&src.fixed.rules, &mut rules, false);
    copy_rules(&src.required.rules, &mut rules, true);
    copy_rules(&src.optional.rules, &mut rules, false);
    diamdict::CommandRules { rules }
}

fn copy_rules(src: &[wireshark::Rule], dst: &mut Vec<diamdict::Rule>, required: bool) {
    dst.extend(src.iter().map(|rule| diamdict::Rule {
        avp: rule.name.clone(),
        required,
        min: rule.min,
        max: rule.max,
    }));
}

fn copy_avps(
    src: &[wireshark::Avp],
    vendors: &[wireshark::Vendor],
    dst: &mut diamdict::Application,
) {
    for avp in src {
        let flags = MustMay::new(avp.mandatory, avp.protected);
        dst.avps.push(diamdict::Avp {
            name: avp.name.clone(),
            code: avp.code,
            must: flags.must.map(str::to_string),
            may: flags.may.map(str::to_string),
            may_encrypt: avp.may_encrypt.code().to_string(),
            vendor_id: resolve_vendor(avp, vendors),
            data: diamdict::Data {
                type_name: type_name(avp),
                enums: avp
                    .enums
                    .iter()
                    .map(|e| diamdict::Enum {
                        name: e.name.clone(),
                        code: e.code,
                    })
                    .collect(),
                rules: grouped_rules(&avp.grouped),
            },
        });
    }
}

fn type_name(avp: &wireshark::Avp) -> String {
    let type_name = avp.type_name();
    if type_name.is_empty() && !avp.grouped.is_empty() {
        return GROUPED.to_string();
    }
    if type_name.is_empty() {
        warn!("AVP {} ({}) has neither a type nor grouped members", avp.name, avp.code);
    }
    type_name.to_string()
}

/// Per group: bare members, then required, then optional. Bare members carry
/// no requirement information and default to not required.
fn grouped_rules(groups: &[wireshark::Grouped]) -> Vec<diamdict::Rule> {
    let mut rules = Vec::new();
    for group in groups {
        copy_rules(&group.members, &mut rules, false);
        copy_rules(&group.required.rules, &mut rules, true);
        copy_rules(&group.optional.rules, &mut rules, false);
    }
    rules
}

fn resolve_vendor(avp: &wireshark::Avp, vendors: &[wireshark::Vendor]) -> Option<u32> {
    let tag = avp.vendor_id.as_deref()?;
    let vendor = vendors
        .iter()
        .find(|v| v.vendor_id.as_deref() == Some(tag));
    if vendor.is_none() {
        warn!("AVP {} references unknown vendor {}", avp.name, tag);
    }
    vendor.map(|v| v.code)
}
