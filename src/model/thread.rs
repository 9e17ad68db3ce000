use serde::Serialize;

//resolved view of one comment inside a thread response
#[derive(Debug, Clone, Serialize)]
pub struct ThreadComment {
    pub uuid: String,
    pub owner: String,
    pub owner_username: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub text: String,
    pub upvote_count: i64,
    pub downvote_count: i64,
    pub reply_count: i64,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    pub comment: ThreadComment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn new(comment: ThreadComment) -> CommentNode {
        CommentNode {
            comment,
            replies: Vec::new(),
        }
    }
}

//splices a reply under its parent wherever the parent sits in the tree,
//appending at the end of that parent's reply list; returns the rebuilt
//tree and whether the parent was found
pub fn insert_reply(
    nodes: Vec<CommentNode>,
    parent_id: &str,
    reply: CommentNode,
) -> (Vec<CommentNode>, bool) {
    let mut reply = Some(reply);
    let nodes = splice(nodes, parent_id, &mut reply);
    let inserted = reply.is_none();

    (nodes, inserted)
}

fn splice(
    nodes: Vec<CommentNode>,
    parent_id: &str,
    reply: &mut Option<CommentNode>,
) -> Vec<CommentNode> {
    let mut rebuilt = Vec::with_capacity(nodes.len());

    for mut node in nodes {
        if reply.is_some() {
            if node.comment.uuid == parent_id {
                node.replies.push(reply.take().unwrap());
            } else {
                node.replies = splice(node.replies, parent_id, reply);
            }
        }

        rebuilt.push(node);
    }

    rebuilt
}

//builds the thread response: top level comments stay exactly in fetched
//order, replies arrive oldest first and are spliced one by one so a reply
//whose parent is itself a reply still nests under it
pub fn assemble(
    top_level: Vec<ThreadComment>,
    replies: Vec<ThreadComment>,
) -> Vec<CommentNode> {
    let mut nodes: Vec<CommentNode> = top_level
        .into_iter()
        .map(CommentNode::new)
        .collect();

    for reply in replies {
        let parent_id = match reply.parent_comment_id.clone() {
            Some(parent_id) => parent_id,
            None => continue,
        };

        let uuid = reply.uuid.clone();
        let (rebuilt, inserted) = insert_reply(
            nodes,
            &parent_id,
            CommentNode::new(reply),
        );
        nodes = rebuilt;

        if !inserted {
            //parent is outside the loaded page; the reply is not shown
            log::warn!(
                "reply {} references parent {} outside the loaded thread",
                uuid,
                parent_id,
            );
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(uuid: &str, parent: Option<&str>, created_at: i64) -> ThreadComment {
        ThreadComment {
            uuid: uuid.to_string(),
            owner: "user-1".to_string(),
            owner_username: "carat99".to_string(),
            post_id: "post-1".to_string(),
            parent_comment_id: parent.map(|p| p.to_string()),
            text: format!("text of {}", uuid),
            upvote_count: 0,
            downvote_count: 0,
            reply_count: 0,
            created_at,
            modified_at: created_at,
        }
    }

    #[test]
    fn top_level_order_is_preserved() {
        //fetched newest first
        let nodes = assemble(
            vec![
                comment("c3", None, 300),
                comment("c2", None, 200),
                comment("c1", None, 100),
            ],
            vec![],
        );

        let order: Vec<&str> = nodes
            .iter()
            .map(|n| n.comment.uuid.as_str())
            .collect();
        assert_eq!(order, vec!["c3", "c2", "c1"]);
    }

    #[test]
    fn replies_append_in_chronological_order() {
        let nodes = assemble(
            vec![comment("c1", None, 100), comment("c0", None, 50)],
            vec![
                comment("r1", Some("c1"), 110),
                comment("r2", Some("c1"), 120),
                comment("r3", Some("c1"), 130),
            ],
        );

        let replies: Vec<&str> = nodes[0]
            .replies
            .iter()
            .map(|n| n.comment.uuid.as_str())
            .collect();
        assert_eq!(replies, vec!["r1", "r2", "r3"]);
        assert!(nodes[1].replies.is_empty());
    }

    #[test]
    fn reply_to_reply_nests_at_depth_two() {
        let nodes = assemble(
            vec![comment("c1", None, 100)],
            vec![
                comment("r1", Some("c1"), 110),
                comment("r2", Some("r1"), 120),
            ],
        );

        assert_eq!(nodes[0].replies.len(), 1);
        assert_eq!(nodes[0].replies[0].comment.uuid, "r1");
        assert_eq!(nodes[0].replies[0].replies.len(), 1);
        assert_eq!(nodes[0].replies[0].replies[0].comment.uuid, "r2");
    }

    #[test]
    fn insert_reply_appends_last_under_deep_parent() {
        let mut nodes = assemble(
            vec![comment("c1", None, 100)],
            vec![
                comment("r1", Some("c1"), 110),
                comment("r2", Some("r1"), 120),
                comment("r3", Some("r1"), 130),
            ],
        );

        let before = nodes[0].replies[0].replies.len();
        let (rebuilt, inserted) = insert_reply(
            nodes,
            "r1",
            CommentNode::new(comment("r4", Some("r1"), 140)),
        );
        nodes = rebuilt;

        assert!(inserted);
        let deep = &nodes[0].replies[0].replies;
        assert_eq!(deep.len(), before + 1);
        assert_eq!(deep.last().unwrap().comment.uuid, "r4");
    }

    #[test]
    fn unknown_parent_changes_nothing() {
        let nodes = assemble(
            vec![comment("c1", None, 100)],
            vec![comment("r1", Some("c1"), 110)],
        );

        let (rebuilt, inserted) = insert_reply(
            nodes,
            "missing",
            CommentNode::new(comment("r9", Some("missing"), 900)),
        );

        assert!(!inserted);
        assert_eq!(rebuilt.len(), 1);
        assert_eq!(rebuilt[0].replies.len(), 1);
    }

    #[test]
    fn created_node_starts_with_no_replies() {
        let node = CommentNode::new(comment("c1", None, 100));
        assert_eq!(node.comment.text, "text of c1");
        assert!(node.replies.is_empty());
    }
}
