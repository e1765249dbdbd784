use super::extract;
use crate::catalog::{Catalog, SectionKind};
use crate::component::Component;
use crate::fixtures::{COUNTER_PAGE, MINIMAL_PAGE};
use crate::region::Region;

fn records(page: &str, kind: SectionKind) -> Vec<super::Record<'_>> {
    let catalog = Catalog::new().unwrap();
    catalog
        .records(page, kind)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_class_summary_components() {
    let class = records(COUNTER_PAGE, SectionKind::ClassSummary);
    assert_eq!(class.len(), 1);
    let class = &class[0];

    assert_eq!(class.get(Component::Type), Some("public class "));
    assert_eq!(class.get(Component::Name), Some("Counter"));
    let inheritance = class.get(Component::InheritanceAndOther).unwrap();
    assert!(inheritance.starts_with("extends <a href="));
    let comment = "A simple counter.\n It counts  upwards.";
    assert_eq!(class.get(Component::Comment), Some(comment));
    assert_eq!(class.get(Component::Since), Some("1.2"));
    let see_also = class.get(Component::SeeAlso).unwrap();
    assert!(see_also.contains("Meter.html"));
}

#[test]
fn test_generic_class_name() {
    let page = concat!(
        "<pre>public interface <span class=\"typeNameLabel\">Box&lt;T&gt;</span>\n",
        "extends Cloneable</pre>\n",
    );
    let class = records(page, SectionKind::ClassSummary);
    assert_eq!(class[0].get(Component::Name), Some("Box&lt;T&gt;"));
    assert_eq!(class[0].get(Component::Type), Some("public interface "));
}

#[test]
fn test_undeclared_components_are_absent() {
    for kind in SectionKind::ALL {
        for record in records(COUNTER_PAGE, kind) {
            for component in Component::ALL {
                if !kind.declares(component) {
                    assert_eq!(record.get(component), None, "{kind} {component}");
                }
            }
        }
    }
}

#[test]
fn test_present_components_are_never_empty() {
    for kind in SectionKind::ALL {
        for record in records(COUNTER_PAGE, kind) {
            for (component, text) in record.components() {
                assert_ne!(text, Some(""), "{kind} {component} is empty");
            }
        }
    }
}

#[test]
fn test_field_without_documentation() {
    let fields = records(COUNTER_PAGE, SectionKind::FieldDetail);
    assert_eq!(fields.len(), 2);

    let count = &fields[1];
    assert_eq!(count.get(Component::Name), Some("protected&nbsp;int count"));
    assert_eq!(count.get(Component::Comment), None);
    assert_eq!(count.get(Component::Since), None);
    assert_eq!(count.get(Component::SeeAlso), None);
}

#[test]
fn test_constructor_blocks_stay_raw() {
    let ctors = records(COUNTER_PAGE, SectionKind::ConstructorDetail);
    assert_eq!(ctors.len(), 1);

    let ctor = &ctors[0];
    assert_eq!(
        ctor.get(Component::Param),
        Some("<dd><code>start</code> - the initial value</dd>")
    );
    let throws = ctor.get(Component::Throw).unwrap();
    assert!(throws.ends_with(" - if start is negative"));
    assert_eq!(ctor.get(Component::Override), None);
}

#[test]
fn test_constructor_without_parameters() {
    let page = concat!(
        "<li class=\"blockList\">\n<h4>Empty</h4>\n<pre>public&nbsp;Empty()</pre>\n",
        "<dl>\n<dt><span class=\"throwsLabel\">Throws:</span></dt>\n",
        "<dd><code>IOException</code> - always</dd>\n</dl>\n</li>\n",
    );
    let catalog = Catalog::new().unwrap();
    let section = catalog.section(SectionKind::ConstructorDetail);
    let ctors: Vec<_> = extract(page, Region::whole(page), section)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(ctors.len(), 1);
    assert_eq!(ctors[0].get(Component::Param), None);
    assert_eq!(
        ctors[0].get(Component::Throw),
        Some("<code>IOException</code> - always")
    );
}

#[test]
fn test_method_parameter_block_spans_entries() {
    let methods = records(COUNTER_PAGE, SectionKind::MethodDetail);
    assert_eq!(methods.len(), 2);

    let add = &methods[0];
    let params = "<dd><code>amount</code> - how much</dd>\n<dd><code>times</code> - how often</dd>";
    assert_eq!(add.get(Component::Param), Some(params));
    assert_eq!(add.get(Component::Return), Some("the new value"));
    assert_eq!(add.get(Component::Since), Some("1.4"));

    let run = &methods[1];
    assert_eq!(run.get(Component::Param), None);
    assert_eq!(run.get(Component::Return), None);
    let overridden = run.get(Component::Override).unwrap();
    assert!(overridden.contains("Base.html"));
}

#[test]
fn test_record_spans_are_absolute_and_ordered() {
    let methods = records(COUNTER_PAGE, SectionKind::MethodDetail);
    let first = methods[0].span();
    let second = methods[1].span();

    assert!(first.end <= second.start, "matches must not overlap");
    assert!(first.slice(COUNTER_PAGE).contains("<h4>add</h4>"));
    assert!(second.slice(COUNTER_PAGE).contains("<h4>run</h4>"));
}

#[test]
fn test_extract_confined_to_region() {
    let catalog = Catalog::new().unwrap();
    let section = catalog.section(SectionKind::MethodDetail);
    let empty = Region::new(0, 0);
    assert_eq!(extract(MINIMAL_PAGE, empty, section).count(), 0);
}
