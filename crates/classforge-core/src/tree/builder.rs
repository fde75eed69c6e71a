use std::time::Instant;

use crate::errors::{ClassForgeError, Result};
use crate::model::{ClassDef, ClassModel};
use crate::tree::TreeNode;
use crate::{log_op_end, log_op_error, log_op_start};

/// Build the configuration tree for `model`
///
/// Starts at the unique root class and follows aggregation edges downward
/// (edge `target` = parent, edge `source` = child) in declaration order.
/// Classes not reachable from the root do not appear. A class reachable
/// through several parents appears once under each of them.
///
/// # Errors
///
/// * `RootClassNotFound` / `MultipleRootClasses` - the model has no unique root
/// * `ClassNotFound` - a reachable edge names an undeclared source class
/// * `CycleDetected` - an edge leads back to a class on the current path
pub fn build_tree(model: &ClassModel) -> Result<TreeNode> {
    log_op_start!(
        "build_tree",
        class_count = model.class_count(),
        edge_count = model.edge_count()
    );
    let start = Instant::now();

    let tree = build_tree_impl(model).map_err(|e| {
        log_op_error!(
            "build_tree",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "build_tree",
        duration_ms = start.elapsed().as_millis() as u64,
        root_class = tree.name.as_str(),
        node_count = tree.node_count()
    );

    Ok(tree)
}

fn build_tree_impl(model: &ClassModel) -> Result<TreeNode> {
    let root = model.root_class()?;

    let mut root_node = class_node(root);
    let mut path = vec![root.name.clone()];
    attach_children(model, &mut root_node, &mut path)?;

    Ok(root_node)
}

/// Element named after the class with one leaf per attribute
fn class_node(class: &ClassDef) -> TreeNode {
    let mut node = TreeNode::element(&class.name);
    for attr in &class.attributes {
        node.push(TreeNode::leaf(&attr.name, &attr.type_name));
    }
    node
}

/// Append a subtree for every edge targeting the last class on `path`
///
/// `path` holds the class names from the root down to `parent`.
fn attach_children(model: &ClassModel, parent: &mut TreeNode, path: &mut Vec<String>) -> Result<()> {
    let parent_class = match path.last() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    for edge in model.children_of(&parent_class) {
        if path.contains(&edge.source) {
            let mut cycle = path.clone();
            cycle.push(edge.source.clone());
            return Err(ClassForgeError::CycleDetected {
                class_name: edge.source.clone(),
                path: cycle,
            });
        }

        let class = model.get_class(&edge.source)?;
        let mut child = class_node(class);

        tracing::trace!(
            class_name = class.name.as_str(),
            parent = parent_class.as_str(),
            depth = path.len(),
            "attaching class node"
        );

        path.push(edge.source.clone());
        attach_children(model, &mut child, path)?;
        path.pop();

        parent.push(child);
    }

    Ok(())
}
